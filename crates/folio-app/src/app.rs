#![forbid(unsafe_code)]

//! Top-level application model: message routing, navigation wiring, and
//! the view.
//!
//! All navigation state flows one way: input produces a fragment write,
//! the location delivers the change signal, the router updates the route,
//! and the commit path rebuilds the page subtree, recomputes layout, and
//! hands the committed layout to the inspector. Nothing else writes the
//! route or the scroll position.

use crate::chrome::Chrome;
use crate::content::{self, SiteContent};
use crate::link::{self, LinkTarget};
use crate::overflow::{LayoutInspector, NoopInspector, OverflowInspector};
use crate::pages;
use crate::router::Router;
use crate::routes::Route;
use crate::theme::Theme;
use folio_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEventKind, SubId};
use folio_render::buffer::Buffer;
use folio_render::cell::Cell;
use folio_render::element::{ElementId, ElementKind, ElementTree};
use folio_render::layout::{Layout, flow};
use folio_render::paint::paint;
use folio_runtime::location::{FragmentChange, Location};
use folio_runtime::program::{Cmd, Model};

/// Application messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A fragment-change delivery from the location.
    Fragment {
        fragment: String,
        subscription: SubId,
    },
    /// Raw key press; interpreted in `update`.
    Key(KeyEvent),
    /// Left click at a screen cell.
    Click { x: u16, y: u16 },
    /// Scroll by a signed number of rows.
    ScrollBy(i32),
    /// Viewport resized.
    Resize { width: u16, height: u16 },
    /// Toggle the menu overlay.
    MenuToggle,
    /// Close the menu overlay (link follow-up and Esc).
    MenuClose,
    /// Quit the application.
    Quit,
    /// Nothing to do.
    Noop,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Msg::Key(key),
            Event::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => Msg::Click {
                    x: mouse.x,
                    y: mouse.y,
                },
                MouseEventKind::Down(_) => Msg::Noop,
                MouseEventKind::ScrollUp => Msg::ScrollBy(-1),
                MouseEventKind::ScrollDown => Msg::ScrollBy(1),
            },
            Event::Resize { width, height } => Msg::Resize { width, height },
            Event::Fragment {
                fragment,
                subscription,
            } => Msg::Fragment {
                fragment,
                subscription,
            },
            Event::Tick => Msg::Noop,
        }
    }
}

/// The portfolio application.
pub struct PortfolioApp {
    tree: ElementTree,
    main: ElementId,
    chrome: Chrome,
    router: Router,
    inspector: Box<dyn LayoutInspector>,
    layout: Layout,
    theme: Theme,
    content: &'static SiteContent,
    scroll: u16,
    width: u16,
    height: u16,
    torn_down: bool,
}

impl PortfolioApp {
    /// Wire the application against a location and commit the initial
    /// route (whatever fragment the location holds at startup).
    pub fn new(location: &mut Location, overflow_debug: bool, width: u16, height: u16) -> Self {
        let theme = Theme::default();
        let content = content::site();
        let mut tree = ElementTree::new();
        let (chrome, main) = Chrome::build(&mut tree, &theme, content);
        let router = Router::attach(location);
        let inspector: Box<dyn LayoutInspector> = if overflow_debug {
            Box::new(OverflowInspector::new(OverflowInspector::default_routes()))
        } else {
            Box::new(NoopInspector)
        };
        let mut app = Self {
            tree,
            main,
            chrome,
            router,
            inspector,
            layout: Layout::default(),
            theme,
            content,
            scroll: 0,
            width: width.max(2),
            height: height.max(1),
            torn_down: false,
        };
        app.commit();
        app
    }

    /// The current route.
    #[must_use]
    pub fn route(&self) -> &Route {
        self.router.route()
    }

    /// Current scroll offset in rows.
    #[must_use]
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Whether the menu overlay is open.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.chrome.menu_open()
    }

    /// Whether the main region has no page content.
    #[must_use]
    pub fn main_is_empty(&self) -> bool {
        self.tree
            .get(self.main)
            .is_none_or(|el| el.children().is_empty())
    }

    /// Number of elements currently carrying an outline.
    #[must_use]
    pub fn outlined_elements(&self) -> usize {
        self.tree
            .walk(self.tree.root())
            .into_iter()
            .filter(|&id| self.tree.get(id).is_some_and(|el| el.outline.is_some()))
            .count()
    }

    /// Release the fragment listener (simulated unmount of the router).
    pub fn detach_router(&mut self) {
        self.router.detach();
    }

    /// Release everything scoped: outstanding diagnostic flags and the
    /// fragment subscription. Idempotent; also runs on drop.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.torn_down = true;
        self.inspector.restore_all(&mut self.tree);
        self.router.detach();
    }

    /// Rightmost column is the scrollbar gutter; content gets the rest.
    fn content_width(&self) -> u16 {
        self.width.saturating_sub(1).max(1)
    }

    fn relayout(&mut self) {
        self.layout = flow(&self.tree, self.content_width());
    }

    /// Rebuild the page subtree for the current route and re-run layout
    /// and the inspector. The route and scroll are already settled when
    /// this runs.
    fn commit(&mut self) {
        let route = self.router.route().clone();
        self.chrome.set_active(&mut self.tree, &self.theme, &route);
        self.tree.clear_children(self.main);
        if let Some(build) = pages::select(&route) {
            build(&mut self.tree, self.main, &self.theme, self.content);
        }
        self.relayout();
        self.inspector
            .after_commit(&mut self.tree, &self.layout, self.width, &route);
    }

    fn max_scroll(&self) -> u16 {
        self.layout.content_height.saturating_sub(self.height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let max = i32::from(self.max_scroll());
        self.scroll = (i32::from(self.scroll) + delta).clamp(0, max) as u16;
    }

    /// Innermost link under a screen cell, if any.
    fn link_at(&self, x: u16, y: u16) -> Option<(ElementId, LinkTarget)> {
        let cy = y.checked_add(self.scroll)?;
        let mut found = None;
        // boxes are preorder; the last hit is the innermost
        for (id, rect) in self.layout.iter() {
            if rect.contains(x, cy)
                && let Some(el) = self.tree.get(id)
                && let ElementKind::Link { href } = &el.kind
            {
                found = Some((id, LinkTarget::from_href(href)));
            }
        }
        found
    }

    fn on_key(&mut self, key: KeyEvent) -> Cmd<Msg> {
        if key.is_char('q') || (key.ctrl() && key.is_char('c')) {
            return Cmd::quit();
        }
        match key.code {
            KeyCode::Char('m') => self.update(Msg::MenuToggle),
            KeyCode::Esc => self.update(Msg::MenuClose),
            KeyCode::Char(c @ '1'..='4') => {
                let idx = (c as usize) - ('1' as usize);
                let route = Route::NAV[idx].clone();
                let follow_up = self.chrome.menu_open().then_some(Msg::MenuClose);
                link::activate(&LinkTarget::Route(route), follow_up)
            }
            KeyCode::Up => {
                self.scroll_by(-1);
                Cmd::none()
            }
            KeyCode::Down => {
                self.scroll_by(1);
                Cmd::none()
            }
            KeyCode::PageUp => {
                self.scroll_by(1 - i32::from(self.height));
                Cmd::none()
            }
            KeyCode::PageDown => {
                self.scroll_by(i32::from(self.height) - 1);
                Cmd::none()
            }
            KeyCode::Home => {
                self.scroll = 0;
                Cmd::none()
            }
            KeyCode::End => {
                self.scroll = self.max_scroll();
                Cmd::none()
            }
            _ => Cmd::none(),
        }
    }

    /// Click interception: a hit on a link consumes the click and turns
    /// it into an activation; menu links additionally close the overlay.
    fn on_click(&mut self, x: u16, y: u16) -> Cmd<Msg> {
        let Some((id, target)) = self.link_at(x, y) else {
            return Cmd::none();
        };
        let follow_up = self.chrome.is_menu_link(id).then_some(Msg::MenuClose);
        link::activate(&target, follow_up)
    }

    fn draw_scrollbar(&self, buf: &mut Buffer) {
        let total = self.layout.content_height;
        let view = buf.height();
        if total <= view {
            return;
        }
        let x = buf.width().saturating_sub(1);
        for y in 0..view {
            buf.set(x, y, Cell::styled('│', self.theme.rule));
        }
        let denom = u32::from(total - view).max(1);
        let thumb = (u32::from(self.scroll) * u32::from(view.saturating_sub(1)) / denom) as u16;
        buf.set(x, thumb.min(view - 1), Cell::styled('█', self.theme.text));
    }
}

impl Model for PortfolioApp {
    type Message = Msg;

    fn update(&mut self, msg: Msg) -> Cmd<Msg> {
        match msg {
            Msg::Fragment {
                fragment,
                subscription,
            } => {
                let change = FragmentChange {
                    fragment,
                    subscription,
                };
                if self.router.handle(&change).is_some() {
                    // scroll resets before the commit the inspector observes
                    self.scroll = 0;
                    self.commit();
                }
                Cmd::none()
            }
            Msg::Key(key) => self.on_key(key),
            Msg::Click { x, y } => self.on_click(x, y),
            Msg::ScrollBy(delta) => {
                self.scroll_by(delta);
                Cmd::none()
            }
            Msg::Resize { width, height } => {
                self.width = width.max(2);
                self.height = height.max(1);
                self.relayout();
                self.scroll = self.scroll.min(self.max_scroll());
                Cmd::none()
            }
            Msg::MenuToggle => {
                let route = self.router.route().clone();
                self.chrome.toggle_menu(&mut self.tree, &self.theme, &route);
                self.relayout();
                Cmd::none()
            }
            Msg::MenuClose => {
                self.chrome.close_menu(&mut self.tree);
                self.relayout();
                Cmd::none()
            }
            Msg::Quit => Cmd::quit(),
            Msg::Noop => Cmd::none(),
        }
    }

    fn view(&self, buf: &mut Buffer) {
        paint(&self.tree, &self.layout, self.scroll, buf);
        self.draw_scrollbar(buf);
    }
}

impl Drop for PortfolioApp {
    fn drop(&mut self) {
        self.teardown();
    }
}
