mod form_draft;
mod login_user;
mod logout_user;
mod signup_user;

pub use form_draft::{
    login_draft_handler, signup_draft_handler, DraftResponse, LoginDraftRequest,
    SignupDraftRequest,
};
pub use login_user::{__path_login_user_handler, login_user_handler, LoginRequestDto, LoginResponse};
pub use logout_user::{__path_logout_user_handler, logout_user_handler, LogoutResponseBody};
pub use signup_user::{__path_signup_user_handler, signup_user_handler, SignupRequestDto, SignupResponse};
