#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;

pub(crate) use form::{
    assert_form_input, assert_form_input_with_value, assert_hx_endpoint, must_get_form,
};
pub(crate) use html::{assert_valid_html, parse_html_document, parse_html_fragment};

use rusqlite::Connection;

use crate::auth::{PasswordHash, User, create_user};

/// Insert a user with a pre-hashed placeholder password.
///
/// Tests that do not exercise the password pipeline should use this instead
/// of hashing a real password, which is slow.
#[track_caller]
pub(crate) fn create_test_user(username: &str, connection: &Connection) -> User {
    create_user(
        username,
        PasswordHash::new_unchecked("$2b$12$Gwf0uvxH3L7JLfo0CC/NCOoijK2vQ/wbgP.LeNup8vj6gg31IiFkm"),
        connection,
    )
    .expect("could not create test user")
}
