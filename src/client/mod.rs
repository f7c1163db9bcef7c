//! Client-side state for the storefront UI.
//!
//! A [`Storefront`] owns one session's [`ViewModel`]: the last catalog
//! snapshot fetched through a [`CatalogApi`], the local filter, the cart, the
//! current view and the gate guarding add/delete. Nothing here is shared
//! between sessions.

pub mod api;
pub mod cart;
pub mod filter;
pub mod gate;
pub mod storefront;
pub mod view;

pub use api::{CatalogApi, ClientError, HttpCatalogApi, LocalCatalogApi};
pub use cart::{Cart, CheckoutAck};
pub use filter::CatalogFilter;
pub use gate::{ActionKind, Gate, GateError, PendingAction};
pub use storefront::{Storefront, ViewModel};
pub use view::View;
