#![forbid(unsafe_code)]

//! Scripted showcase session for the rowpane windowing engine.
//!
//! Builds a 10,000-row catalog, then drives the list controller through
//! the moves a real host would make: manual scrolling (including a burst
//! of rapid notifications), smooth navigation to both ends, and
//! grow-on-append. The viewport is a loopback stand-in that echoes every
//! programmatic command back as a scroll notification one frame later,
//! the way a real scroll surface does.
//!
//! Run with `RUST_LOG=rowpane=debug` to watch the throttle, animator, and
//! window recomputations underneath the printed snapshots.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rowpane::{ListController, Row, RowId, ViewportConfig, ViewportHost};
use tracing_subscriber::EnvFilter;
use web_time::{Duration, Instant};

const FRAME: Duration = Duration::from_millis(16);
const TOTAL_ROWS: usize = 10_000;

/// Loopback scroll surface: commands become next-frame notifications.
#[derive(Debug, Default)]
struct EchoViewport {
    position: f64,
    echo: Option<f64>,
}

impl ViewportHost for EchoViewport {
    fn set_scroll_position(&mut self, offset: f64) {
        self.position = offset;
        self.echo = Some(offset);
    }
}

const WORDS: &[&str] = &[
    "anodized", "brass", "copper", "dovetail", "enamel", "flanged", "grommet",
    "hinged", "knurled", "lacquered", "machined", "oiled", "polished",
    "riveted", "tempered", "walnut",
];

fn new_row(index: usize, rng: &mut SmallRng) -> Row {
    let words = rng.random_range(1..=3);
    let description = (0..words)
        .map(|_| WORDS[rng.random_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(", ");
    let price = format!("{:.2}", rng.random_range(0.0..50.0));
    Row::new(RowId(index as u64 + 1), description, price)
}

/// Run frames until the controller goes quiet, echoing commands back.
fn settle(list: &mut ListController<Row>, viewport: &mut EchoViewport, start: Instant) -> Instant {
    let mut now = start;
    loop {
        now += FRAME;
        if let Some(raw) = viewport.echo.take() {
            list.on_scroll(raw, now);
        }
        let tick = list.tick(viewport, now);
        if !tick.needs_frame && viewport.echo.is_none() {
            return now;
        }
    }
}

fn print_snapshot(label: &str, list: &ListController<Row>, viewport: &EchoViewport) {
    let range = list.visible_range();
    println!("\n== {label}");
    println!(
        "   scroll {:>9.1} / {:>9.1}   window [{}, {})   {} rows materialized",
        viewport.position,
        list.content_extent(),
        range.start,
        range.end,
        range.len(),
    );
    for visible in list.visible().take(3) {
        let row = visible.row;
        println!(
            "   #{:<6} @{:>9.1}  {}  ${}",
            row.id, visible.offset, row.description, row.price
        );
    }
    if range.len() > 3 {
        println!("   ... {} more", range.len() - 3);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut rng = SmallRng::seed_from_u64(0x5257_414e);
    let rows: Vec<Row> = (0..TOTAL_ROWS).map(|i| new_row(i, &mut rng)).collect();

    let config = ViewportConfig::default();
    let mut list = ListController::with_rows(rows, config);
    let mut viewport = EchoViewport::default();
    let mut now = Instant::now();

    tracing::info!(rows = TOTAL_ROWS, "catalog ready");
    print_snapshot("initial window", &list, &viewport);

    // A burst of manual scrolling: only the last position matters.
    for step in 1..=12u32 {
        let position = f64::from(step) * 425_000.0 / 12.0;
        list.on_scroll(position, now + Duration::from_millis(u64::from(step)));
    }
    now = settle(&mut list, &mut viewport, now + Duration::from_millis(12));
    print_snapshot("after a scroll burst to mid-list", &list, &viewport);

    list.scroll_to_end(now);
    now = settle(&mut list, &mut viewport, now);
    print_snapshot("after smooth scroll to the end", &list, &viewport);

    for _ in 0..3 {
        let row = new_row(list.len(), &mut rng);
        list.append(row, now);
        now = settle(&mut list, &mut viewport, now);
    }
    print_snapshot("after appending three rows", &list, &viewport);

    list.scroll_to_start(now);
    settle(&mut list, &mut viewport, now);
    print_snapshot("back at the top", &list, &viewport);

    list.detach();
}
