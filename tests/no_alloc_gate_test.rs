use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use tui_memory::core::{GameConfig, GameSession, SessionSnapshot};
use tui_memory::term::{FrameBuffer, GameView, TilePalette, Viewport};
use tui_memory::types::{GameAction, Point, PAIR_COUNT};

struct CountingAlloc;

static COUNT_ENABLED: AtomicBool = AtomicBool::new(false);
static ALLOC_COUNT: AtomicUsize = AtomicUsize::new(0);

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = layout;
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.alloc(layout)
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        System.dealloc(ptr, layout)
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        if COUNT_ENABLED.load(Ordering::Relaxed) {
            let _ = (layout, new_size);
            ALLOC_COUNT.fetch_add(1, Ordering::Relaxed);
        }
        System.realloc(ptr, layout, new_size)
    }
}

fn with_alloc_counting<F: FnOnce()>(f: F) -> usize {
    ALLOC_COUNT.store(0, Ordering::Relaxed);
    COUNT_ENABLED.store(true, Ordering::Relaxed);
    f();
    COUNT_ENABLED.store(false, Ordering::Relaxed);
    ALLOC_COUNT.load(Ordering::Relaxed)
}

#[test]
fn frame_loop_hot_path_does_not_allocate() {
    // Setup (outside counting) so one-time allocations don't trip the gate.
    let images = TilePalette::default().image_ids(PAIR_COUNT).unwrap();
    let mut s = GameSession::new(GameConfig::default().with_seed(5), &images).unwrap();
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut snap = SessionSnapshot::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    let points: Vec<Point> = (0..16)
        .map(|i| s.board().tile(i).unwrap().rect().center())
        .collect();

    let play = |s: &mut GameSession, snap: &mut SessionSnapshot, fb: &mut FrameBuffer| {
        let mut now = 0;
        for round in 0..400 {
            let p = points[round % points.len()];
            now += 16;
            let _ = s.frame([GameAction::Select(p)], now);
            s.snapshot_into(snap);
            view.render_into(snap, vp, fb);
        }
    };

    // Warm-up on a copy so every code path has been visited once.
    let mut warm = s.clone();
    play(&mut warm, &mut snap, &mut fb);

    let allocs = with_alloc_counting(|| play(&mut s, &mut snap, &mut fb));

    assert!(allocs == 0);
}
