//! Fruit Catcher entry point
//!
//! The browser host wires the engine to a canvas, the Web Audio manager, the
//! DOM HUD, and the external pose pipeline. The pose model and its stabilizer
//! live in JS and feed lane labels in through `set_pose_label`.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

    use fruit_catcher::Settings;
    use fruit_catcher::audio::AudioManager;
    use fruit_catcher::render::CanvasSurface;
    use fruit_catcher::sim::{GameConfig, GameEngine};

    /// Game instance holding the engine and its output devices
    struct Game {
        engine: GameEngine,
        surface: CanvasSurface,
        audio: AudioManager,
        settings: Settings,
    }

    impl Game {
        /// Flip the mute preference, apply it, and persist it
        fn toggle_mute(&mut self) -> bool {
            self.settings.muted = !self.settings.muted;
            self.audio.set_muted(self.settings.muted);
            self.settings.save();
            self.settings.muted
        }
    }

    thread_local! {
        /// Handle for the exported pose entry point
        static GAME: RefCell<Option<Rc<RefCell<Game>>>> = const { RefCell::new(None) };
    }

    /// Entry point for the JS pose pipeline: feed one stabilized label
    pub fn set_pose_label(label: &str) {
        GAME.with(|slot| {
            if let Some(game) = slot.borrow().as_ref() {
                game.borrow_mut().engine.set_player_pose(label);
            }
        });
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Fruit Catcher starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("game-canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let width = canvas.width() as f32;
        let height = canvas.height() as f32;

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let settings = Settings::load();
        let mut audio = AudioManager::new();
        audio.set_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);

        let seed = js_sys::Date::now() as u64;
        let config = GameConfig {
            width,
            height,
            ..Default::default()
        };
        let mut engine = GameEngine::new(config, seed);
        hook_hud(&document, &mut engine);

        let game = Rc::new(RefCell::new(Game {
            engine,
            surface: CanvasSurface::new(ctx, width, height),
            audio,
            settings,
        }));
        GAME.with(|slot| *slot.borrow_mut() = Some(game.clone()));

        setup_buttons(&document, game.clone());
        setup_keyboard(game.clone());

        request_animation_frame(game);

        log::info!("Fruit Catcher running (seed {seed})");
    }

    /// Wire the engine's output callbacks to the DOM HUD
    fn hook_hud(document: &Document, engine: &mut GameEngine) {
        let doc = document.clone();
        engine.set_on_score_change(move |score, level, time| {
            set_text(&doc, "hud-score", &score.to_string());
            set_text(&doc, "hud-level", &level.to_string());
            set_text(&doc, "hud-time", &time.to_string());
        });

        let doc = document.clone();
        engine.set_on_game_end(move |score, level| {
            set_text(&doc, "final-score", &score.to_string());
            set_text(&doc, "final-level", &level.to_string());
            if let Some(el) = doc.get_element_by_id("game-over") {
                let _ = el.set_attribute("class", "");
            }
        });
    }

    fn set_text(doc: &Document, id: &str, text: &str) {
        if let Some(el) = doc.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn hide_overlay(doc: &Document) {
        if let Some(el) = doc.get_element_by_id("game-over") {
            let _ = el.set_attribute("class", "hidden");
        }
    }

    fn setup_buttons(document: &Document, game: Rc<RefCell<Game>>) {
        // Start and restart both just (re)start the run; the engine handles
        // re-entry by replacing its countdown
        for id in ["start-btn", "restart-btn"] {
            if let Some(btn) = document.get_element_by_id(id) {
                let game = game.clone();
                let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                    let document = web_sys::window().unwrap().document().unwrap();
                    hide_overlay(&document);
                    game.borrow_mut().engine.start();
                });
                let _ =
                    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
                closure.forget();
            }
        }

        if let Some(btn) = document.get_element_by_id("stop-btn") {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().engine.stop();
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        if let Some(btn) = document.get_element_by_id("mute-btn") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let muted = game.borrow_mut().toggle_mute();
                let document = web_sys::window().unwrap().document().unwrap();
                set_text(
                    &document,
                    "mute-btn",
                    if muted { "\u{1F507}" } else { "\u{1F50A}" },
                );
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Keyboard fallback for playing without a camera
    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let label = match event.key().as_str() {
                "ArrowLeft" | "a" => "Left",
                "ArrowDown" | "s" => "Neutral",
                "ArrowRight" | "d" => "Right",
                _ => return,
            };
            game.borrow_mut().engine.set_player_pose(label);
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, _time: f64) {
        {
            let mut g = game.borrow_mut();
            g.engine.update();

            for sound in g.engine.take_sounds() {
                g.audio.play(sound);
            }

            let Game {
                engine, surface, ..
            } = &mut *g;
            engine.draw(surface);
        }

        request_animation_frame(game);
    }
}

/// Entry point for the JS pose pipeline (model + stabilizer stay in JS)
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn set_pose_label(label: &str) {
    wasm_game::set_pose_label(label);
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Fruit Catcher (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the browser version");

    run_headless_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Drive a full session at a simulated 60fps without sleeping
#[cfg(not(target_arch = "wasm32"))]
fn run_headless_session() {
    use fruit_catcher::clock::ManualClock;
    use fruit_catcher::sim::{GameConfig, GameEngine};

    let clock = ManualClock::new();
    let mut engine = GameEngine::with_clock(GameConfig::default(), 42, Box::new(clock.clone()));
    engine.set_on_game_end(|score, level| {
        println!("game over: score {score}, level {level}");
    });

    engine.start();
    let mut frames = 0u32;
    while engine.is_active() {
        clock.advance(1000.0 / 60.0);
        engine.update();
        frames += 1;

        // The basket stays centered, so a center-lane bomb ends the run early.
        // Either terminal path exercises the full engine.
        if frames % 600 == 0 {
            let s = engine.state();
            println!(
                "t={}s score={} level={} items={}",
                s.time_remaining,
                s.score,
                s.level,
                s.items.len()
            );
        }
    }
    println!("session finished after {frames} frames");
}
