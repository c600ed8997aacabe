//! HTML template rendering handlers for the login page.

mod login;

pub use login::{
    FLASH_COOKIE, LoginForm, LoginIntent, SESSION_COOKIE, login_page_handler, login_submit_handler,
};
