//! dotkit-ui: a dots page indicator and the paged views it observes.
//!
//! The toolkit centers on [`DotsIndicator`], a row of dots mirroring the
//! page state of some paged content view. Three host view flavors are
//! provided ([`pager::PagerView`], [`carousel::CarouselView`],
//! [`list_view::ItemListView`]) along with [`attach`] glue that keeps the
//! indicator in sync with any of them. All rendering goes through the
//! `RenderBackend` trait -- no platform-specific code.

pub mod adapter;
pub mod attach;
pub mod carousel;
pub use dotkit_types::color;
pub mod context;
pub mod dots;
pub mod layout;
pub mod list_view;
pub mod listeners;
pub mod pager;
pub mod style;
pub mod theme;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_utils;

pub use attach::{Attachment, PagedSource};
pub use context::DrawContext;
pub use dots::DotsIndicator;
pub use style::DotStyle;
pub use theme::Theme;
pub use widget::Widget;
