//! Arcade Portfolio entry point
//!
//! The web build wires the console, splash and skills game to the DOM. The
//! native build runs a headless attract-mode game and logs what happens.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        Document, Element, EventTarget, HtmlCanvasElement, HtmlInputElement, HtmlTextAreaElement,
        KeyboardEvent, TouchEvent,
    };

    use arcade_portfolio::api::{self, ContactMessage, Project};
    use arcade_portfolio::audio::{AudioManager, MUSIC_REPEAT_MS, SoundCue, cue_for_event};
    use arcade_portfolio::console::{ArcadeConsole, HudView, InsertCoin, SPLASH_STEP_MS, Section};
    use arcade_portfolio::input::{InputController, attract_direction, command_for_key};
    use arcade_portfolio::layout::BoardLayout;
    use arcade_portfolio::renderer::{CanvasRenderer, build_frame};
    use arcade_portfolio::sim::{Direction, GameEvent, GamePhase, GameState, Session};
    use arcade_portfolio::{Settings, SkillCatalog};

    /// Site instance holding all state
    struct Site {
        settings: Settings,
        audio: AudioManager,
        console: ArcadeConsole,
        splash: InsertCoin,
        splash_timer: Option<i32>,
        music_started: bool,
        session: Session,
        input: InputController,
        /// Autopilot steers the snake
        attract: bool,
        /// Filled by the session observer, drained after every mutation
        events: Rc<RefCell<Vec<GameEvent>>>,
        renderer: Option<CanvasRenderer>,
        layout: BoardLayout,
        projects_requested: bool,
        sending: bool,
        /// Audio muted by a window blur rather than by the user
        blur_muted: bool,
    }

    impl Site {
        fn new(settings: Settings, seed: u64) -> Result<Self, JsValue> {
            let config = settings.game_config();
            let mut session = Session::new(config, SkillCatalog::default(), seed)
                .map_err(|e| JsValue::from_str(&e.to_string()))?;

            let events = Rc::new(RefCell::new(Vec::new()));
            {
                let events = events.clone();
                session.subscribe(move |event: &GameEvent, _state: &GameState| {
                    events.borrow_mut().push(event.clone());
                });
            }

            let mut audio = AudioManager::new();
            audio.apply_settings(&settings);

            let layout =
                BoardLayout::for_variant(settings.board_variant, session.board(), viewport_width());
            let input = InputController::new(session.config().swipe_threshold);

            Ok(Self {
                settings,
                audio,
                console: ArcadeConsole::new(),
                splash: InsertCoin::new(),
                splash_timer: None,
                music_started: false,
                session,
                input,
                attract: false,
                events,
                renderer: None,
                layout,
                projects_requested: false,
                sending: false,
                blur_muted: false,
            })
        }

        fn relayout(&mut self) {
            self.layout = BoardLayout::for_variant(
                self.settings.board_variant,
                self.session.board(),
                viewport_width(),
            );
        }

        /// Play cues for queued session events
        fn flush_events(&mut self) {
            let events: Vec<GameEvent> = self.events.borrow_mut().drain(..).collect();
            for event in &events {
                match event {
                    GameEvent::FoodCollision { skill, score } => {
                        log::info!("Collected {} (score {})", skill.name, score)
                    }
                    GameEvent::WallCollision { .. } | GameEvent::SelfCollision { .. } => {
                        log::info!("Game over with score {}", self.session.state().score)
                    }
                    _ => log::debug!("Session event: {:?}", event),
                }
                if let Some(cue) = cue_for_event(event) {
                    self.audio.play(cue);
                }
            }
        }

        /// Sync sounds, canvas and HUD with the session
        fn refresh(&mut self) {
            self.flush_events();
            self.render();
            self.update_hud();
        }

        fn render(&self) {
            if let Some(renderer) = &self.renderer {
                renderer.render(&build_frame(self.session.state(), &self.layout));
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let Some(document) = document() else { return };
            let hud = HudView::new(self.session.state());

            set_text(&document, "hud-score", &hud.score.to_string());
            set_text(&document, "hud-skills", &hud.skills_count.to_string());

            if let Some(skill) = hud.featured {
                set_text(&document, "skill-info-icon", &skill.icon);
                set_text(&document, "skill-info-name", &skill.name);
                let description = if hud.featured_is_collected {
                    skill.description.as_str()
                } else {
                    "Collect skills by eating the food items!"
                };
                set_text(&document, "skill-info-desc", description);
            }

            if let Some(list) = document.get_element_by_id("skills-collected") {
                list.set_text_content(None);
                if hud.collected.is_empty() {
                    append_text(&document, &list, "div", "collected-empty", "None yet.");
                }
                for skill in &hud.collected {
                    if let Ok(item) = document.create_element("div") {
                        item.set_class_name("collected-skill");
                        let _ = item.set_attribute("title", &skill.name);
                        append_text(&document, &item, "div", "collected-icon", &skill.icon);
                        append_text(&document, &item, "div", "collected-name", &skill.name);
                        let _ = list.append_child(&item);
                    }
                }
            }

            set_hidden(&document, "game-overlay", hud.overlay.is_none());
            if let Some(text) = hud.overlay {
                set_text(&document, "game-overlay-text", text);
            }
            set_hidden(&document, "btn-start", !hud.show_start);
            set_hidden(&document, "btn-play-again", !hud.show_play_again);

            let pause_label = if self.session.phase() == GamePhase::Paused {
                "RESUME"
            } else {
                "PAUSE"
            };
            set_text(&document, "btn-pause", pause_label);
        }

        fn update_mute_button(&self) {
            let Some(document) = document() else { return };
            if let Some(btn) = document.get_element_by_id("mute-toggle") {
                let label = if self.settings.muted { "Unmute" } else { "Mute" };
                let _ = btn.set_attribute("aria-label", label);
                let _ = btn.class_list().toggle_with_force("muted", self.settings.muted);
            }
        }

        /// Show the active section, hide the rest
        fn show_section(&self) {
            let Some(document) = document() else { return };
            let active = self.console.active();
            for section in Section::ALL {
                set_hidden(&document, &format!("section-{}", section.id()), section != active);
                if let Some(btn) = document.get_element_by_id(&format!("nav-{}", section.id())) {
                    let _ = btn.class_list().toggle_with_force("active", section == active);
                }
            }
            set_text(&document, "console-title", active.label());
            set_text(&document, "console-subtitle", active.description());
        }

        fn start_game(&mut self) {
            if self.session.phase().is_terminal() {
                self.session.reset();
            }
            self.session.start();
            self.refresh();
        }

        fn toggle_mute(&mut self) {
            let muted = self.settings.toggle_mute();
            self.audio.set_muted(muted);
            self.blur_muted = false;
            self.settings.save();
            self.update_mute_button();
            log::info!("Audio {}", if muted { "muted" } else { "unmuted" });
        }

        /// Pause a running game without user input
        fn auto_pause(&mut self, reason: &str) {
            if self.session.phase() == GamePhase::Running && self.session.toggle_pause() {
                log::info!("Auto-paused ({})", reason);
                self.refresh();
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn viewport_width() -> f32 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .unwrap_or(1024.0) as f32
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_hidden(document: &Document, id: &str, hidden: bool) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.class_list().toggle_with_force("hidden", hidden);
        }
    }

    fn append_text(document: &Document, parent: &Element, tag: &str, class: &str, text: &str) {
        if let Ok(el) = document.create_element(tag) {
            el.set_class_name(class);
            el.set_text_content(Some(text));
            let _ = parent.append_child(&el);
        }
    }

    fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(web_sys::Event) + 'static) {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn listen_id(
        document: &Document,
        id: &str,
        kind: &str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) {
        match document.get_element_by_id(id) {
            Some(el) => listen(&el, kind, handler),
            None => log::warn!("Missing element #{}", id),
        }
    }

    fn set_interval(ms: i32, handler: impl FnMut() + 'static) -> Option<i32> {
        let window = web_sys::window()?;
        let closure = Closure::<dyn FnMut()>::new(handler);
        let id = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                ms,
            )
            .ok();
        closure.forget();
        id
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        log::info!("Arcade Portfolio starting...");

        let document = document().ok_or_else(|| JsValue::from_str("no document"))?;

        let settings = Settings::load();
        let seed = js_sys::Date::now() as u64;
        let site = Rc::new(RefCell::new(Site::new(settings, seed)?));
        log::info!("Skills game initialized with seed: {}", seed);

        let canvas = document
            .get_element_by_id("game-canvas")
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());
        match canvas.map(CanvasRenderer::new) {
            Some(Ok(renderer)) => site.borrow_mut().renderer = Some(renderer),
            Some(Err(e)) => log::warn!("Canvas unavailable: {:?}", e),
            None => log::warn!("Missing #game-canvas - board will not render"),
        }

        setup_splash(&document, site.clone());
        setup_navigation(&document, site.clone());
        setup_game_controls(&document, site.clone());
        setup_touch(&document, site.clone());
        setup_keyboard(site.clone());
        setup_contact_form(&document, site.clone());
        setup_mute_toggle(&document, site.clone());
        setup_auto_pause(&document, site.clone());
        setup_resize(site.clone());
        start_tick_timer(site.clone());

        {
            let mut s = site.borrow_mut();
            s.show_section();
            s.update_mute_button();
            s.refresh();
        }

        // Hide loading indicator
        set_hidden(&document, "loading", true);

        log::info!("Arcade Portfolio running!");
        Ok(())
    }

    fn setup_splash(document: &Document, site: Rc<RefCell<Site>>) {
        listen_id(document, "insert-coin", "click", move |_event| insert_coin(&site));
    }

    /// Coin drop: start the loading bar and the music loop
    fn insert_coin(site: &Rc<RefCell<Site>>) {
        let reduced_motion = {
            let mut s = site.borrow_mut();
            let Some(cue) = s.splash.insert_coin() else { return };
            s.audio.resume();
            s.audio.play(cue);
            s.settings.reduced_motion
        };

        if let Some(document) = document() {
            set_hidden(&document, "insert-coin-prompt", true);
            set_hidden(&document, "loading-screen", false);
        }

        start_music(site);

        if reduced_motion {
            site.borrow_mut().splash.finish();
            enter_console(site);
            return;
        }

        let timer = {
            let site = site.clone();
            set_interval(SPLASH_STEP_MS as i32, move || {
                let ready = {
                    let mut s = site.borrow_mut();
                    let ready = s.splash.advance(SPLASH_STEP_MS);
                    if let Some(document) = document() {
                        let progress = s.splash.progress();
                        set_text(&document, "loading-percent", &format!("{}%", progress));
                        if let Some(bar) = document.get_element_by_id("loading-bar") {
                            let _ = bar.set_attribute("style", &format!("width: {}%", progress));
                        }
                        set_hidden(&document, "ready-player-one", progress < 100);
                    }
                    ready
                };
                if ready {
                    enter_console(&site);
                }
            })
        };
        site.borrow_mut().splash_timer = timer;
    }

    fn enter_console(site: &Rc<RefCell<Site>>) {
        let mut s = site.borrow_mut();
        if let (Some(timer), Some(window)) = (s.splash_timer.take(), web_sys::window()) {
            window.clear_interval_with_handle(timer);
        }
        if let Some(document) = document() {
            set_hidden(&document, "splash", true);
            set_hidden(&document, "console", false);
        }
        s.show_section();
        s.relayout();
        s.refresh();
        log::info!("Console ready");
    }

    fn start_music(site: &Rc<RefCell<Site>>) {
        {
            let mut s = site.borrow_mut();
            if s.music_started {
                return;
            }
            s.music_started = true;
            s.audio.play_music_pattern();
        }
        let site = site.clone();
        let _ = set_interval(MUSIC_REPEAT_MS, move || {
            site.borrow().audio.play_music_pattern();
        });
    }

    fn setup_navigation(document: &Document, site: Rc<RefCell<Site>>) {
        for section in Section::ALL {
            let id = format!("nav-{}", section.id());
            {
                let site = site.clone();
                listen_id(document, &id, "click", move |_event| select_section(&site, section));
            }
            {
                let site = site.clone();
                listen_id(document, &id, "mouseenter", move |_event| {
                    let s = site.borrow();
                    s.audio.play(s.console.hover());
                });
            }
        }
    }

    fn select_section(site: &Rc<RefCell<Site>>, section: Section) {
        let load_projects = {
            let mut s = site.borrow_mut();
            let Some(cue) = s.console.select(section) else { return };
            s.audio.play(cue);
            if section != Section::Game {
                s.auto_pause("left game section");
            }
            s.show_section();
            if section == Section::Game {
                s.relayout();
                s.refresh();
            }
            let first_visit = section == Section::Projects && !s.projects_requested;
            if first_visit {
                s.projects_requested = true;
            }
            first_visit
        };

        if load_projects {
            wasm_bindgen_futures::spawn_local(async {
                let result = api::fetch_projects().await;
                let Some(document) = document() else { return };
                match result {
                    Ok(projects) => render_projects(&document, &projects),
                    Err(e) => {
                        log::error!("Failed to load projects: {}", e);
                        set_text(
                            &document,
                            "projects-status",
                            "Could not load projects. Try again later.",
                        );
                    }
                }
            });
        }
    }

    fn render_projects(document: &Document, projects: &[Project]) {
        let Some(list) = document.get_element_by_id("projects-list") else { return };
        list.set_text_content(None);
        set_hidden(document, "projects-status", !projects.is_empty());
        if projects.is_empty() {
            set_text(document, "projects-status", "No projects yet.");
        }

        for project in projects {
            let Ok(card) = document.create_element("article") else { continue };
            card.set_class_name("project-card");
            if let Ok(img) = document.create_element("img") {
                let _ = img.set_attribute("src", &project.image_url);
                let _ = img.set_attribute("alt", &project.title);
                let _ = card.append_child(&img);
            }
            append_text(document, &card, "h3", "project-title", &project.title);
            append_text(document, &card, "p", "project-description", &project.description);
            for (label, href) in [("CODE", &project.repo_url), ("LIVE", &project.live_url)] {
                if href.is_empty() {
                    continue;
                }
                if let Ok(link) = document.create_element("a") {
                    link.set_class_name("project-link");
                    link.set_text_content(Some(label));
                    let _ = link.set_attribute("href", href);
                    let _ = link.set_attribute("target", "_blank");
                    let _ = link.set_attribute("rel", "noopener noreferrer");
                    let _ = card.append_child(&link);
                }
            }
            let _ = list.append_child(&card);
        }
    }

    fn setup_game_controls(document: &Document, site: Rc<RefCell<Site>>) {
        for id in ["btn-start", "btn-play-again"] {
            let site = site.clone();
            listen_id(document, id, "click", move |_event| site.borrow_mut().start_game());
        }

        {
            let site = site.clone();
            listen_id(document, "btn-pause", "click", move |_event| {
                let mut s = site.borrow_mut();
                let s = &mut *s;
                s.input.toggle_pause_request(&mut s.session);
                s.refresh();
            });
        }

        {
            let site = site.clone();
            listen_id(document, "btn-reset", "click", move |_event| {
                let mut s = site.borrow_mut();
                s.session.reset();
                s.refresh();
            });
        }

        for (id, direction) in [
            ("ctrl-up", Direction::Up),
            ("ctrl-down", Direction::Down),
            ("ctrl-left", Direction::Left),
            ("ctrl-right", Direction::Right),
        ] {
            let site = site.clone();
            listen_id(document, id, "click", move |_event| {
                let mut s = site.borrow_mut();
                let s = &mut *s;
                s.input.control_tap(&mut s.session, direction);
            });
        }
    }

    fn touch_point(event: &TouchEvent) -> Option<Vec2> {
        let touch = event.touches().get(0)?;
        Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
    }

    fn setup_touch(document: &Document, site: Rc<RefCell<Site>>) {
        let Some(board) = document.get_element_by_id("game-board") else {
            log::warn!("Missing #game-board - swipe controls disabled");
            return;
        };

        {
            let site = site.clone();
            listen(&board, "touchstart", move |event| {
                let Some(event) = event.dyn_ref::<TouchEvent>() else { return };
                if let Some(point) = touch_point(event) {
                    site.borrow_mut().input.touch_start(point);
                }
            });
        }

        {
            let site = site.clone();
            listen(&board, "touchmove", move |event| {
                // Keep the page from scrolling under the swipe
                event.prevent_default();
                let Some(event) = event.dyn_ref::<TouchEvent>() else { return };
                if let Some(point) = touch_point(event) {
                    let mut s = site.borrow_mut();
                    let s = &mut *s;
                    s.input.touch_move(&mut s.session, point);
                }
            });
        }

        listen(&board, "touchend", move |_event| site.borrow_mut().input.touch_end());
    }

    fn setup_keyboard(site: Rc<RefCell<Site>>) {
        let Some(window) = web_sys::window() else { return };
        listen(&window, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else { return };
            let key = key_event.key();

            let (splash_ready, section) = {
                let s = site.borrow();
                (s.splash.is_ready(), s.console.active())
            };

            if !splash_ready {
                if key == "Enter" {
                    insert_coin(&site);
                }
                return;
            }
            if section != Section::Game {
                return;
            }
            if key == "i" || key == "I" {
                let mut s = site.borrow_mut();
                s.attract = !s.attract;
                log::info!("Attract mode: {}", s.attract);
                return;
            }
            if command_for_key(&key).is_none() {
                return;
            }

            // Arrows and space would scroll the page
            event.prevent_default();
            let mut s = site.borrow_mut();
            let s = &mut *s;
            s.input.key_down(&mut s.session, &key);
            s.refresh();
        });
    }

    fn setup_contact_form(doc: &Document, site: Rc<RefCell<Site>>) {
        listen_id(doc, "contact-form", "submit", move |event| {
            event.prevent_default();
            let Some(document) = document() else { return };

            let message = ContactMessage {
                name: input_value(&document, "contact-name"),
                email: input_value(&document, "contact-email"),
                message: textarea_value(&document, "contact-message"),
            };

            {
                let mut s = site.borrow_mut();
                if s.sending {
                    return;
                }
                if let Err(e) = message.validate() {
                    log::info!("Submission stopped by client-side check: {}", e);
                    return;
                }
                s.sending = true;
            }
            set_text(&document, "contact-status", "SENDING...");

            let site = site.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = api::send_contact(&message).await;
                let mut s = site.borrow_mut();
                s.sending = false;
                let Some(document) = document() else { return };
                match result {
                    Ok(()) => {
                        s.audio.play(SoundCue::SubmitSuccess);
                        set_input_value(&document, "contact-name", "");
                        set_input_value(&document, "contact-email", "");
                        set_textarea_value(&document, "contact-message", "");
                        set_text(&document, "contact-status", "MESSAGE SENT!");
                    }
                    Err(e) => {
                        log::error!("Submission failed: {}", e);
                        s.audio.play(SoundCue::SubmitError);
                        set_text(&document, "contact-status", "Error: Please Retry!");
                    }
                }
            });
        });
    }

    fn input_value(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|el| el.value())
            .unwrap_or_default()
    }

    fn textarea_value(document: &Document, id: &str) -> String {
        document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
            .map(|el| el.value())
            .unwrap_or_default()
    }

    fn set_input_value(document: &Document, id: &str, value: &str) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        {
            el.set_value(value);
        }
    }

    fn set_textarea_value(document: &Document, id: &str, value: &str) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlTextAreaElement>().ok())
        {
            el.set_value(value);
        }
    }

    fn setup_mute_toggle(document: &Document, site: Rc<RefCell<Site>>) {
        listen_id(document, "mute-toggle", "click", move |_event| {
            site.borrow_mut().toggle_mute();
        });
    }

    fn setup_auto_pause(document: &Document, site: Rc<RefCell<Site>>) {
        let Some(window) = web_sys::window() else { return };

        // Visibility change (tab switch, minimize)
        {
            let site = site.clone();
            let document_clone = document.clone();
            listen(document, "visibilitychange", move |_event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    site.borrow_mut().auto_pause("tab hidden");
                }
            });
        }

        // Window blur (click outside)
        {
            let site = site.clone();
            listen(&window, "blur", move |_event| {
                let mut s = site.borrow_mut();
                s.auto_pause("window blur");
                if s.settings.mute_on_blur && !s.audio.is_muted() {
                    s.audio.set_muted(true);
                    s.blur_muted = true;
                }
            });
        }

        listen(&window, "focus", move |_event| {
            let mut s = site.borrow_mut();
            if s.blur_muted {
                let muted = s.settings.muted;
                s.audio.set_muted(muted);
                s.blur_muted = false;
            }
        });
    }

    fn setup_resize(site: Rc<RefCell<Site>>) {
        let Some(window) = web_sys::window() else { return };
        listen(&window, "resize", move |_event| {
            let mut s = site.borrow_mut();
            s.relayout();
            s.render();
        });
    }

    /// Fixed-period game timer; ticks are no-ops unless the game is running
    fn start_tick_timer(site: Rc<RefCell<Site>>) {
        let interval = site.borrow().session.config().tick_interval_ms as i32;
        let timer = set_interval(interval, move || {
            let mut s = site.borrow_mut();
            if s.console.active() != Section::Game || s.session.phase() != GamePhase::Running {
                return;
            }
            if s.attract {
                if let Some(direction) = attract_direction(s.session.state(), &s.session.board()) {
                    s.session.request_direction(direction);
                }
            }
            s.session.tick();
            s.refresh();
        });
        if timer.is_none() {
            log::error!("Failed to start game timer");
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_site::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), arcade_portfolio::ConfigError> {
    use arcade_portfolio::input::attract_direction;
    use arcade_portfolio::sim::{GameEvent, GameState};
    use arcade_portfolio::{GameConfig, Session, SkillCatalog};

    /// Stop the demo even if the pilot never dies
    const MAX_DEMO_TICKS: u64 = 5_000;

    env_logger::init();
    log::info!("Arcade Portfolio (native) starting...");
    log::info!("The site itself needs a browser - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(42);

    let mut session = Session::new(GameConfig::classic(), SkillCatalog::default(), seed)?;
    session.subscribe(|event: &GameEvent, state: &GameState| {
        let tick = state.time_ticks;
        match event {
            GameEvent::FoodCollision { skill, score } => {
                log::info!("tick {tick:>4}: ate {} {} (score {score})", skill.icon, skill.name)
            }
            GameEvent::WallCollision { head } => {
                log::info!("tick {tick:>4}: hit the wall at {head:?}")
            }
            GameEvent::SelfCollision { head } => {
                log::info!("tick {tick:>4}: bit itself at {head:?}")
            }
            GameEvent::BoardCleared { score } => {
                log::info!("tick {tick:>4}: board cleared (score {score})")
            }
            other => log::debug!("{:?}", other),
        }
    });

    session.start();
    while session.state().time_ticks < MAX_DEMO_TICKS && !session.phase().is_terminal() {
        if let Some(direction) = attract_direction(session.state(), &session.board()) {
            session.request_direction(direction);
        }
        session.tick();
    }

    let state = session.state();
    log::info!(
        "Attract mode finished: {:?} after {} ticks, score {}, length {}, {} skills collected",
        state.phase,
        state.time_ticks,
        state.score,
        state.len(),
        state.collected.len()
    );
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
