//! dotkit console demo.
//!
//! Walks one indicator through all three source flavors: a pager flipped
//! programmatically, a carousel driven by drags, and an item list the
//! indicator follows by its center item. Each step renders a frame of
//! draw commands to stdout through [`trace::TraceBackend`].
//!
//! Pass a TOML style sheet path as the first argument to restyle the
//! dots; otherwise the dark theme's colors are used.

mod trace;

use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use anyhow::Result;

use dotkit_ui::adapter::VecAdapter;
use dotkit_ui::carousel::CarouselView;
use dotkit_ui::list_view::ItemListView;
use dotkit_ui::pager::PagerView;
use dotkit_ui::{DotStyle, DotsIndicator, DrawContext, PagedSource, Theme, Widget};

use trace::TraceBackend;

const SCREEN_W: u32 = 480;
const SCREEN_H: u32 = 272;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let theme = Theme::dark();

    // Resolve the dot style from a CLI arg, falling back to the theme.
    let style = match std::env::args().nth(1) {
        Some(path) => DotStyle::from_file(Path::new(&path))?,
        None => DotStyle::from_theme(&theme),
    };
    log::info!(
        "Starting dotkit demo ({}x{}, {}px dots)",
        SCREEN_W,
        SCREEN_H,
        style.dot_size
    );

    let indicator = Rc::new(RefCell::new(DotsIndicator::new(style)));
    let mut backend = TraceBackend;

    // -- Pager: programmatic page flips --

    let pages = vec!["Home", "Library", "Search", "Settings"];
    let mut pager = PagerView::new();
    pager.set_adapter(Some(Box::new(VecAdapter::new(pages))));

    let attachment = DotsIndicator::attach(&indicator, PagedSource::Pager(&mut pager));
    log::info!("Pager attached: {} pages", pager.item_count());

    render_frame(&mut backend, &theme, &indicator)?;
    for page in [1, 3, 0] {
        pager.set_page(page);
        log::info!("Pager flipped to page {}", pager.page());
        render_frame(&mut backend, &theme, &indicator)?;
    }
    attachment.detach();

    // -- Carousel: drag transitions --

    let mut carousel = CarouselView::new();
    carousel.set_adapter(Some(Box::new(VecAdapter::new(vec![(); 5]))));

    let attachment = DotsIndicator::attach(&indicator, PagedSource::Carousel(&mut carousel));
    log::info!("Carousel attached: {} pages", carousel.item_count());

    for _ in 0..3 {
        carousel.begin_drag();
        carousel.drag_by(0.8);
        carousel.end_drag();
        log::info!("Carousel settled on page {}", carousel.page());
        render_frame(&mut backend, &theme, &indicator)?;
    }
    attachment.detach();

    // -- Item list: selection follows the center item --

    let mut list = ItemListView::new(120, SCREEN_W);
    list.set_adapter(Some(Box::new(VecAdapter::new(vec![(); 8]))));

    let attachment = DotsIndicator::attach(&indicator, PagedSource::ItemList(&mut list));
    log::info!("Item list attached: {} items", list.item_count());

    for delta in [200, 200] {
        list.begin_drag();
        list.scroll_by(delta);
        list.end_drag();
        list.settle();
        let geometry = list.geometry();
        log::info!(
            "List rests at offset {}, center item {:?}",
            geometry.scroll_offset,
            geometry.nearest_to_center()
        );
        render_frame(&mut backend, &theme, &indicator)?;
    }
    attachment.detach();

    log::info!("Demo finished");
    Ok(())
}

/// Render the indicator strip along the bottom edge of the screen.
fn render_frame(
    backend: &mut TraceBackend,
    theme: &Theme,
    indicator: &Rc<RefCell<DotsIndicator>>,
) -> Result<()> {
    let indicator = indicator.borrow();
    let mut ctx = DrawContext::new(backend, theme);
    let (_, dot_h) = indicator.measure(&ctx, SCREEN_W, SCREEN_H);
    let strip_h = dot_h.saturating_add(u32::from(theme.spacing_md));
    let strip_y = strip_origin(strip_h);

    println!("frame:");
    ctx.control_strip(0, strip_y, SCREEN_W, strip_h)?;
    indicator.draw(&mut ctx, 0, strip_y, SCREEN_W, strip_h)?;
    Ok(())
}

/// Y position of a strip of the given height along the bottom edge.
/// Style sheets are taken as-is, so the strip may outgrow the screen;
/// it then pins to the top edge instead of wrapping past it.
fn strip_origin(strip_h: u32) -> i32 {
    (i64::from(SCREEN_H) - i64::from(strip_h)).max(0) as i32
}
