//! A mounted carousel: engine state, presenter, timer and event listeners.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use carousel::{Carousel, CarouselOptions, Direction, Frame, Measurement};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, HtmlElement, Window};

use crate::mount::{MountError, Selectors, Structure, js_message};
use crate::presenter::DomPresenter;
use crate::timer::Timeout;

/// A carousel bound to live markup.
///
/// The widget listens for clicks on both controls and for `resize` on the window. Dropping
/// it removes the listeners and cancels a pending re-layout; the markup keeps its last state.
pub struct CarouselWidget {
    // Declared first so listeners are removed before the state they point at goes away.
    listeners: Vec<Listener>,
    inner: Rc<Inner>,
}

struct Inner {
    window: Window,
    carousel: RefCell<Carousel>,
    presenter: RefCell<DomPresenter>,
    resize_timer: Timeout,
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event,
            self.closure.as_ref().unchecked_ref::<js_sys::Function>(),
        );
    }
}

fn listen(
    target: &EventTarget,
    event: &'static str,
    callback: impl FnMut(Event) + 'static,
) -> Result<Listener, MountError> {
    let closure = Closure::wrap(Box::new(callback) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(
            event,
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
        )
        .map_err(|err| MountError::Listener {
            event,
            message: js_message(&err),
        })?;
    Ok(Listener {
        target: target.clone(),
        event,
        closure,
    })
}

/// Milliseconds from `performance.now()`, falling back to `Date.now()`.
fn now_ms(window: &Window) -> u64 {
    let ms = window
        .performance()
        .map_or_else(js_sys::Date::now, |p| p.now());
    ms.max(0.0) as u64
}

impl CarouselWidget {
    pub(crate) fn mount(
        container: &HtmlElement,
        options: CarouselOptions,
        selectors: &Selectors,
    ) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let structure = Structure::discover(container, selectors)?;
        let prev: EventTarget = structure.prev.clone().into();
        let next: EventTarget = structure.next.clone().into();

        let presenter = DomPresenter::new(structure, selectors.current_class.clone());
        let measurement = presenter.measure(&window);
        let carousel = Carousel::with_options(presenter.slide_count(), measurement, options)
            .ok_or(MountError::NoSlides)?;
        ddebug!(
            slides = carousel.slide_count(),
            slide_width = carousel.slide_width(),
            slides_to_show = carousel.slides_to_show(),
            "mounted carousel"
        );

        let inner = Rc::new_cyclic(|weak: &Weak<Inner>| {
            let weak = weak.clone();
            Inner {
                resize_timer: Timeout::new(window.clone(), move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.on_resize_timer();
                    }
                }),
                window: window.clone(),
                carousel: RefCell::new(carousel),
                presenter: RefCell::new(presenter),
            }
        });
        inner.present();

        let listeners = vec![
            listen(&prev, "click", navigate_on_click(&inner, Direction::Prev))?,
            listen(&next, "click", navigate_on_click(&inner, Direction::Next))?,
            listen(&window, "resize", {
                let weak = Rc::downgrade(&inner);
                move |_| {
                    if let Some(inner) = weak.upgrade() {
                        inner.on_resize();
                    }
                }
            })?,
        ];

        Ok(Self { listeners, inner })
    }

    pub fn current_index(&self) -> usize {
        self.inner.carousel.borrow().current_index()
    }

    /// A snapshot of the engine state.
    ///
    /// The engine is shared with the event handlers, so only owned snapshots leave the widget.
    pub fn frame(&self) -> Frame {
        self.inner.carousel.borrow().frame()
    }

    /// Same as clicking the control for `direction`, except that it is not blocked by the
    /// control's `disabled` state.
    pub fn navigate(&self, direction: Direction) -> bool {
        self.inner.navigate(direction)
    }

    pub fn next(&self) -> bool {
        self.navigate(Direction::Next)
    }

    pub fn prev(&self) -> bool {
        self.navigate(Direction::Prev)
    }

    /// Re-measures and re-lays out immediately, skipping the resize debounce.
    pub fn relayout(&self) {
        self.inner.resize_timer.cancel();
        let measurement = self.inner.presenter.borrow().measure(&self.inner.window);
        {
            let mut c = self.inner.carousel.borrow_mut();
            c.cancel_resize();
            c.relayout(measurement);
        }
        self.inner.present();
    }
}

impl core::fmt::Debug for CarouselWidget {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselWidget")
            .field("listeners", &self.listeners.len())
            .field("carousel", &*self.inner.carousel.borrow())
            .field("presenter", &*self.inner.presenter.borrow())
            .field("resize_timer", &self.inner.resize_timer)
            .finish()
    }
}

fn navigate_on_click(inner: &Rc<Inner>, direction: Direction) -> impl FnMut(Event) + 'static {
    let weak = Rc::downgrade(inner);
    move |_| {
        if let Some(inner) = weak.upgrade() {
            inner.navigate(direction);
        }
    }
}

impl Inner {
    fn present(&self) {
        let mut c = self.carousel.borrow_mut();
        let mut p = self.presenter.borrow_mut();
        c.present(&mut *p);
    }

    fn navigate(&self, direction: Direction) -> bool {
        // A click dispatched while the engine is borrowed (e.g. `button.click()` from inside a
        // handler) is dropped rather than re-entering.
        let Ok(mut c) = self.carousel.try_borrow_mut() else {
            dtrace!(?direction, "navigate: engine busy");
            return false;
        };
        let moved = c.navigate(direction);
        drop(c);
        if moved {
            self.present();
        }
        moved
    }

    fn on_resize(&self) {
        let now = now_ms(&self.window);
        let delay = {
            let mut c = self.carousel.borrow_mut();
            c.notify_resize(now);
            c.options().resize_debounce_ms
        };
        self.resize_timer.arm(delay);
    }

    fn on_resize_timer(&self) {
        self.resize_timer.mark_fired();
        let now = now_ms(&self.window);
        let wake = {
            let mut c = self.carousel.borrow_mut();
            let p = self.presenter.borrow();
            wake_resize(&mut c, now, || p.measure(&self.window))
        };

        match wake {
            ResizeWake::Relaid => {
                dtrace!(now, "resize relayout");
                self.present();
            }
            ResizeWake::Rearm(remaining) => self.resize_timer.arm(remaining),
            ResizeWake::Idle => {}
        }
    }
}

/// What the resize timer does after it fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ResizeWake {
    /// The debounced re-layout ran and needs presenting.
    Relaid,
    /// The timer fired before the debounce period was over; wait this many more ms.
    Rearm(u64),
    /// Nothing pending.
    Idle,
}

pub(crate) fn wake_resize(
    carousel: &mut Carousel,
    now_ms: u64,
    measure: impl FnOnce() -> Measurement,
) -> ResizeWake {
    if carousel.tick(now_ms, measure) {
        return ResizeWake::Relaid;
    }
    // Timer and clock can disagree by a millisecond; never re-arm with 0.
    carousel
        .resize_remaining_ms(now_ms)
        .map_or(ResizeWake::Idle, |remaining| {
            ResizeWake::Rearm(remaining.max(1))
        })
}
