//! App Router

use salvo::Router;

use crate::{
    auth, bookings, carts, inquiries, products, promotions, testimonials, users,
};

/// Routes reachable without a session.
fn public_router() -> Router {
    Router::new()
        .push(Router::with_path("users/signup").post(users::signup::handler))
        .push(Router::with_path("users/login").post(users::login::handler))
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .push(Router::with_path("{product}").get(products::get::handler)),
        )
        .push(Router::with_path("promotions/active").get(promotions::active::handler))
        .push(Router::with_path("testimonials").get(testimonials::index::handler))
        .push(Router::with_path("inquiries").post(inquiries::create::handler))
}

/// Routes behind the bearer-token middleware.
fn protected_router() -> Router {
    Router::new()
        .hoop(auth::middleware::handler)
        .push(
            Router::with_path("users")
                .get(users::index::handler)
                .push(Router::with_path("logout").post(users::logout::handler))
                .push(
                    Router::with_path("me")
                        .get(users::me::handler)
                        .push(
                            Router::with_path("deletion-request")
                                .post(users::request_deletion::handler),
                        ),
                )
                .push(
                    Router::with_path("deletion-requests")
                        .get(users::deletion_requests::handler)
                        .push(
                            Router::with_path("{user}").patch(users::resolve_deletion::handler),
                        ),
                )
                .push(
                    Router::with_path("{user}")
                        .delete(users::delete::handler)
                        .push(Router::with_path("role").patch(users::role::handler)),
                ),
        )
        .push(
            Router::with_path("products")
                .post(products::create::handler)
                .push(
                    Router::with_path("{product}")
                        .put(products::update::handler)
                        .delete(products::delete::handler),
                ),
        )
        .push(
            Router::with_path("cart")
                .get(carts::mine::handler)
                .post(carts::open::handler)
                .patch(carts::details::handler)
                .push(
                    Router::with_path("items")
                        .post(carts::items::create::handler)
                        .push(
                            Router::with_path("{product}")
                                .put(carts::items::update::handler)
                                .delete(carts::items::delete::handler),
                        ),
                ),
        )
        .push(
            Router::with_path("carts")
                .get(carts::index::handler)
                .push(
                    Router::with_path("{cart}")
                        .get(carts::get::handler)
                        .delete(carts::delete::handler),
                ),
        )
        .push(
            Router::with_path("bookings")
                .get(bookings::index::handler)
                .post(bookings::create::handler)
                .push(Router::with_path("mine").get(bookings::mine::handler))
                .push(Router::with_path("users/{user}").get(bookings::for_user::handler))
                .push(
                    Router::with_path("{booking}")
                        .get(bookings::get::handler)
                        .delete(bookings::delete::handler)
                        .push(Router::with_path("status").patch(bookings::status::handler)),
                ),
        )
        .push(
            Router::with_path("promotions")
                .get(promotions::index::handler)
                .post(promotions::create::handler)
                .push(
                    Router::with_path("{promotion}")
                        .get(promotions::get::handler)
                        .put(promotions::update::handler)
                        .delete(promotions::delete::handler),
                ),
        )
        .push(
            Router::with_path("testimonials")
                .post(testimonials::create::handler)
                .push(
                    Router::with_path("{testimonial}")
                        .put(testimonials::update::handler)
                        .delete(testimonials::delete::handler),
                ),
        )
}

pub(crate) fn app_router() -> Router {
    Router::new().push(public_router()).push(protected_router())
}
