//! Trail Duel entry point
//!
//! The windowed display/input backend is an external integration; the
//! shipped binary wires the headless backend and runs a scripted session,
//! which doubles as a smoke check of the full control loop.

use trail_duel::platform::headless::{
    HeadlessDisplay, ManualClock, RecordingRenderer, ScriptedInput,
};
use trail_duel::platform::{Event, Key, MouseButton};
use trail_duel::{App, Mode, Settings, ui};

fn main() {
    env_logger::init();
    log::info!("Trail Duel starting...");
    log::info!("No display backend wired in; running a scripted headless session");

    let settings = Settings::load();
    let clock = ManualClock::new();
    let input = ScriptedInput::new();
    let renderer = RecordingRenderer::new();
    let time = clock.handle();
    let script = input.handle();
    let render_log = renderer.handle();

    let mut app = App::new(
        Box::new(clock),
        Box::new(input),
        Box::new(renderer),
        Box::new(HeadlessDisplay::new((1920, 1080))),
        settings,
    );

    // Start a round from the menu, then drive the players toward each
    // other until they cross trails a few times
    script.borrow_mut().push_event(Event::MouseButtonDown {
        button: MouseButton::Left,
        pos: ui::menu_entry_rect(0).center(),
    });
    script.borrow_mut().held = vec![Key::Left, Key::Char('d')];

    for tick_no in 0..300u32 {
        time.set(tick_no as f64 / 60.0);
        app.step();
        if app.mode() == Mode::Quit {
            break;
        }
    }

    let [p1, p2] = &app.world().players;
    println!(
        "Scripted session: 300 ticks, deaths {} / {}, {} frames presented",
        p1.death_count,
        p2.death_count,
        render_log.borrow().presents
    );

    script.borrow_mut().push_event(Event::Quit);
    app.step();
    log::info!("Demo session finished");
}
