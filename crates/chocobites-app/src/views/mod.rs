//! The views module contains the components for all Layouts and Routes for our app. Each layout and route in our [`Route`]
//! enum will render one of these components.
//!
//! Every page sits under the [`Navigation`] layout, which wraps it in the
//! site header and [`Footer`].
//!
//! [`Route`]: crate::Route

mod navigation;
pub use navigation::Navigation;

mod footer;
pub use footer::Footer;

mod home;
pub use home::Home;

mod menu;
pub use menu::{Menu, menu_route};

mod menu_item;
pub use menu_item::MenuItem;

mod about;
pub use about::About;

mod contact;
pub use contact::{Contact, ContactForm};

mod not_found;
pub use not_found::PageNotFound;
