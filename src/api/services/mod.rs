pub mod frontend;
pub mod links;
pub mod redirect;

pub use frontend::FrontendService;
pub use links::LinkHandlers;
pub use redirect::RedirectService;
