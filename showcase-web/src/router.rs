use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Gallery,
    #[at("/replica")]
    Replica,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Label for the page switcher in the app shell.
    #[must_use]
    pub const fn nav_label(&self) -> Option<&'static str> {
        match self {
            Self::Gallery => Some("Projects"),
            Self::Replica => Some("Chat replica"),
            Self::NotFound => None,
        }
    }
}
