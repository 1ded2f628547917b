mod landing;
mod login;
mod not_found;
mod register;

pub(crate) use landing::LandingPage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;
pub(crate) use register::RegisterPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

pub(crate) mod paths {
    pub const HOME: &str = "/";
    pub const REGISTER: &str = "/register";
    pub const LOGIN: &str = "/login";
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=LandingPage />
            <Route path=path!("/register") view=RegisterPage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
