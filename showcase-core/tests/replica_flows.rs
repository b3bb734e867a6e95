use showcase_core::constants::{HEADLINE_RESTORE_MS, RESIZE_DEBOUNCE_MS, TOOLTIP_THROTTLE_MS};
use showcase_core::{
    ConversationHistory, DropdownState, InputBoxState, ManualTimers, ReplicaConfig, SidebarState,
    Throttled, TimerHost, TooltipState, debounce, throttle,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn resize_burst_closes_sidebar_once_settled() {
    let timers = ManualTimers::new();
    let sidebar = Rc::new(Cell::new(SidebarState::default().toggled()));
    let on_resize = {
        let sidebar = Rc::clone(&sidebar);
        debounce(timers.clone(), RESIZE_DEBOUNCE_MS, move |width: f64| {
            sidebar.set(sidebar.get().on_resize(width));
        })
    };

    on_resize.call(500.0);
    on_resize.call(900.0);
    timers.advance(u64::from(RESIZE_DEBOUNCE_MS) - 1);
    assert!(sidebar.get().open, "still waiting for the burst to settle");

    timers.advance(1);
    assert!(!sidebar.get().open);
    assert_eq!(timers.pending(), 0);
}

#[test]
fn resize_burst_ending_on_mobile_keeps_drawer() {
    let timers = ManualTimers::new();
    let sidebar = Rc::new(Cell::new(SidebarState::default().toggled()));
    let on_resize = {
        let sidebar = Rc::clone(&sidebar);
        debounce(timers.clone(), RESIZE_DEBOUNCE_MS, move |width: f64| {
            sidebar.set(sidebar.get().on_resize(width));
        })
    };
    on_resize.call(1200.0);
    on_resize.call(400.0);
    timers.advance(1_000);
    assert!(sidebar.get().open);
}

type TooltipMover = Throttled<ManualTimers, (i32, i32)>;

fn throttled_tooltip(timers: &ManualTimers) -> (Rc<RefCell<TooltipState>>, TooltipMover) {
    let tooltip = Rc::new(RefCell::new(TooltipState::show("New chat", 0, 0)));
    let mover = {
        let tooltip = Rc::clone(&tooltip);
        throttle(timers.clone(), TOOLTIP_THROTTLE_MS, move |(x, y): (i32, i32)| {
            let next = tooltip.borrow().moved(x, y);
            *tooltip.borrow_mut() = next;
        })
    };
    (tooltip, mover)
}

fn position(tooltip: &RefCell<TooltipState>) -> (i32, i32) {
    let state = tooltip.borrow();
    (state.left, state.top)
}

#[test]
fn tooltip_moves_are_throttled_between_frames() {
    let timers = ManualTimers::new();
    let (tooltip, mover) = throttled_tooltip(&timers);

    assert!(mover.call((5, 5)));
    assert!(!mover.call((50, 50)));
    assert_eq!(position(&tooltip), (15, 15));

    timers.advance(u64::from(TOOLTIP_THROTTLE_MS));
    assert_eq!(position(&tooltip), (60, 60));
    assert!(mover.call((80, 80)));
    assert_eq!(position(&tooltip), (90, 90));
}

#[test]
fn tooltip_settles_at_pointer_resting_inside_gate() {
    let timers = ManualTimers::new();
    let (tooltip, mover) = throttled_tooltip(&timers);

    mover.call((5, 5));
    mover.call((40, 40));
    mover.call((60, 80));
    timers.advance(1_000);
    assert_eq!(position(&tooltip), (70, 90));
}

#[test]
fn rapid_conversation_picks_restore_configured_headline() {
    let config = ReplicaConfig::default();
    let timers = ManualTimers::new();
    let headline = Rc::new(RefCell::new(config.headline.clone()));
    let mut history = ConversationHistory::new(vec!["Trip ideas".into(), "Rust lifetimes".into()]);
    let mut pending = None;

    for index in [0, 1] {
        let swap = history
            .select(index, &config.headline)
            .expect("index in range");
        headline.replace(swap.shown);
        let sink = Rc::clone(&headline);
        let restore = swap.restore;
        pending = Some(timers.schedule(
            swap.restore_after_ms,
            Box::new(move || {
                sink.replace(restore);
            }),
        ));
        timers.advance(100);
    }
    assert_eq!(*headline.borrow(), "Rust lifetimes");
    assert_eq!(timers.pending(), 1, "the first restore was replaced");

    timers.advance(u64::from(HEADLINE_RESTORE_MS));
    assert_eq!(*headline.borrow(), config.headline);
    assert!(history.is_active(1));
    drop(pending);
}

#[test]
fn mobile_focus_then_blur_round_trip() {
    let focused = InputBoxState::default().on_focus(375.0);
    assert!(focused.state.expanded);
    assert!(focused.state.keyboard_open);
    assert!(focused.scroll_after_ms.is_some());

    let typed = focused.state.on_blur("draft message");
    assert!(typed.expanded, "text keeps the box expanded");
    assert!(!typed.keyboard_open);

    let cleared = focused.state.on_blur("   ");
    assert_eq!(cleared, InputBoxState::default());
}

#[test]
fn choosing_a_version_closes_menu_and_outside_click_is_noop() {
    let config = ReplicaConfig::default();
    let menu = DropdownState::new(config.default_version.clone()).toggled();
    let chosen = menu.select("2.5 Flash");
    assert!(!chosen.open);
    assert!(chosen.is_selected("2.5 Flash"));
    assert_eq!(chosen.on_document_click(false), chosen);
}

#[test]
fn resize_pending_at_teardown_never_fires() {
    let timers = ManualTimers::new();
    let sidebar = Rc::new(Cell::new(SidebarState::default().toggled()));
    let on_resize = {
        let sidebar = Rc::clone(&sidebar);
        debounce(timers.clone(), RESIZE_DEBOUNCE_MS, move |width: f64| {
            sidebar.set(sidebar.get().on_resize(width));
        })
    };
    on_resize.call(1200.0);
    on_resize.cancel();
    timers.advance(1_000);
    assert!(sidebar.get().open);
    assert_eq!(timers.pending(), 0);
}
