//! The player controller.
//!
//! Owns every piece of mutable player state and reacts to user input and
//! platform notifications. Built once by the root component and shared as
//! an `Rc`; all of it runs on the UI thread, and no `RefCell` borrow is held
//! across an `.await`.

use std::cell::RefCell;
use std::rc::Rc;

use tokio::time::Instant;

use super::controls::{IdleCheck, InactivityTimer};
use super::error::{PlayerError, PlayerResult};
use super::events::{HostEvent, KeyPress};
use super::fullscreen::{FullscreenMachine, FullscreenReaction, FullscreenTarget};
use super::host::PlayerHost;
use super::media::{check_intake, BoundSource, IncomingFile, SourceBinding};
use super::transport::{
    format_rate, parse_rate_entry, seek_target, step_rate_down, step_rate_up, SeekDirection,
};
use crate::hotkeys::{handle_hotkey, key_from_dom, HotkeyAction, HotkeyContext, HotkeyResult, KeyBindings};
use crate::state::{PlayerConfig, PlayerView};

pub const INVALID_DROP_MESSAGE: &str = "Please drop a valid video file.";

/// Direction of a speed button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedStep {
    Faster,
    Slower,
}

pub struct PlayerController<H: PlayerHost> {
    host: H,
    config: PlayerConfig,
    bindings: KeyBindings,
    view: RefCell<PlayerView>,
    fullscreen: RefCell<FullscreenMachine>,
    controls: RefCell<InactivityTimer>,
    source: RefCell<SourceBinding>,
}

impl<H: PlayerHost> PlayerController<H> {
    pub fn new(host: H, config: PlayerConfig) -> Rc<Self> {
        let bindings = KeyBindings::from_config(&config);
        Rc::new(Self {
            host,
            config,
            bindings,
            view: RefCell::new(PlayerView::default()),
            fullscreen: RefCell::new(FullscreenMachine::default()),
            controls: RefCell::new(InactivityTimer::default()),
            source: RefCell::new(SourceBinding::default()),
        })
    }

    #[allow(dead_code)]
    pub fn view(&self) -> PlayerView {
        self.view.borrow().clone()
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    #[allow(dead_code)]
    pub fn migration_in_flight(&self) -> bool {
        self.fullscreen.borrow().migration_in_flight()
    }

    /// Dispatch one notification from the web view.
    pub async fn handle_event(self: &Rc<Self>, event: HostEvent) {
        match event {
            HostEvent::FileChosen { file } => self.open_file(file).await,
            HostEvent::FileDropped { file } => self.drop_file(file).await,
            HostEvent::DragOver => self.set_drag_hover(true),
            HostEvent::DragLeave => self.set_drag_hover(false),
            HostEvent::RateChange { rate } => self.on_rate_changed(rate),
            HostEvent::FullscreenChange { target } => self.on_fullscreen_change(target),
            HostEvent::KeyDown(press) => self.on_key(&press).await,
        }
    }

    fn update_view(&self, apply: impl FnOnce(&mut PlayerView)) {
        let snapshot = {
            let mut view = self.view.borrow_mut();
            let before = view.clone();
            apply(&mut view);
            if *view == before {
                return;
            }
            view.clone()
        };
        self.host.present(&snapshot);
    }

    /// Push fullscreen and visibility flags to the view. Controls are always
    /// shown outside container fullscreen, whatever the timer says.
    fn sync_view_flags(&self) {
        let fullscreen_active = self.fullscreen.borrow().is_container_active();
        let controls_visible = !fullscreen_active || self.controls.borrow().visible();
        self.update_view(|view| {
            view.fullscreen_active = fullscreen_active;
            view.controls_visible = controls_visible;
        });
    }

    // ── File intake ─────────────────────────────────────────────────

    /// A file picked through the file dialog.
    pub async fn open_file(&self, file: IncomingFile) {
        self.load_file(file).await;
    }

    /// A drop on the drop zone; `None` when the drop carried no file.
    pub async fn drop_file(&self, file: Option<IncomingFile>) {
        self.set_drag_hover(false);
        let Some(file) = file else {
            log::warn!("rejected drop: {}", PlayerError::NoFile);
            self.host.alert(INVALID_DROP_MESSAGE);
            return;
        };
        if let Err(err) = check_intake(&file) {
            log::warn!("rejected dropped file: {}", err);
            self.host.alert(INVALID_DROP_MESSAGE);
            if let Err(err) = self.host.discard_file(file.token).await {
                log::debug!("could not discard file handle {}: {}", file.token, err);
            }
            return;
        }
        self.load_file(file).await;
    }

    async fn load_file(&self, file: IncomingFile) {
        let name = file.name.clone();
        if let Err(err) = self.bind_file(file).await {
            log::warn!("failed to load {}: {}", name, err);
            self.update_view(|view| view.status = format!("Could not open {}", name));
        }
    }

    async fn bind_file(&self, file: IncomingFile) -> PlayerResult<()> {
        let url = self.host.create_source_url(&file).await?;
        if let Err(err) = self.host.load_source(&url).await {
            if let Err(revoke_err) = self.host.revoke_source_url(&url).await {
                log::debug!("could not revoke {}: {}", url.as_str(), revoke_err);
            }
            return Err(err);
        }
        if let Err(err) = self.host.set_position(0.0).await {
            log::warn!("could not reset position: {}", err);
        }
        if let Err(err) = self.host.play().await {
            log::warn!("autoplay refused for {}: {}", file.name, err);
        }
        log::info!("loaded {} ({} bytes, {})", file.name, file.size, file.mime);

        let replaced = self.source.borrow_mut().replace(BoundSource {
            url,
            name: file.name.clone(),
        });
        if let Some(previous) = replaced {
            if self.config.revoke_replaced_sources {
                if let Err(err) = self.host.revoke_source_url(&previous.url).await {
                    log::warn!("could not release {}: {}", previous.url.as_str(), err);
                }
            }
        }

        self.update_view(|view| {
            view.status = format!("Playing {}", file.name);
            view.source_name = Some(file.name);
        });
        Ok(())
    }

    pub fn set_drag_hover(&self, hover: bool) {
        self.update_view(|view| view.drag_hover = hover);
    }

    // ── Transport ───────────────────────────────────────────────────

    pub async fn seek(&self, direction: SeekDirection) {
        let position = match self.host.position().await {
            Ok(position) => position,
            Err(err) => {
                log::warn!("could not read position: {}", err);
                return;
            }
        };
        let target = seek_target(position, self.config.seek_step_seconds, direction);
        if let Err(err) = self.host.set_position(target).await {
            log::warn!("seek to {:.2}s failed: {}", target, err);
        }
    }

    pub async fn adjust_speed(&self, step: SpeedStep) {
        let rate = match self.host.playback_rate().await {
            Ok(rate) => rate,
            Err(err) => {
                log::warn!("could not read playback rate: {}", err);
                return;
            }
        };
        let next = match step {
            SpeedStep::Faster => step_rate_up(rate, self.config.rate_step, self.config.min_rate),
            SpeedStep::Slower => step_rate_down(rate, self.config.rate_step, self.config.min_rate),
        };
        self.apply_rate(next).await;
    }

    /// Commit text typed into the rate field. Anything that is not a positive
    /// number just redisplays the current rate.
    pub async fn commit_rate_entry(&self, text: &str) {
        match parse_rate_entry(text) {
            Some(rate) => self.apply_rate(rate).await,
            None => {
                log::debug!("ignoring rate entry {:?}", text);
                self.refresh_rate().await;
            }
        }
    }

    async fn apply_rate(&self, rate: f64) {
        if let Err(err) = self.host.set_playback_rate(rate).await {
            log::warn!("could not set playback rate {:.2}: {}", rate, err);
        }
        self.refresh_rate().await;
    }

    /// Re-read the element's rate so the readout matches what is playing.
    pub async fn refresh_rate(&self) {
        match self.host.playback_rate().await {
            Ok(rate) => self.on_rate_changed(rate),
            Err(err) => {
                log::warn!("could not read playback rate: {}", err);
                self.update_view(|view| view.rate_revision += 1);
            }
        }
    }

    /// The element reported a rate change (from any source).
    pub fn on_rate_changed(&self, rate: f64) {
        self.update_view(|view| {
            view.rate_text = format_rate(rate);
            view.rate_revision += 1;
        });
    }

    // ── Keyboard ────────────────────────────────────────────────────

    pub async fn on_key(&self, press: &KeyPress) {
        let context = HotkeyContext {
            input_focused: press.editable,
        };
        let key = key_from_dom(&press.key);
        match handle_hotkey(&key, press.shift, press.ctrl, press.alt, press.meta, &context, &self.bindings) {
            HotkeyResult::Action(action) => self.run_hotkey(action).await,
            HotkeyResult::NoMatch | HotkeyResult::Suppressed => {}
        }
    }

    async fn run_hotkey(&self, action: HotkeyAction) {
        match action {
            HotkeyAction::SeekForward => self.seek(SeekDirection::Forward).await,
            HotkeyAction::SeekBackward => self.seek(SeekDirection::Backward).await,
        }
    }

    // ── Fullscreen ──────────────────────────────────────────────────

    /// Toggle-button handler. State changes arrive later through
    /// `on_fullscreen_change`; a rejected request changes nothing.
    pub async fn toggle_fullscreen(&self) {
        let current = match self.host.fullscreen_element().await {
            Ok(current) => current,
            Err(err) => {
                log::warn!("could not read fullscreen element: {}", err);
                FullscreenTarget::None
            }
        };
        let result = match current {
            FullscreenTarget::None => self.host.request_fullscreen(FullscreenTarget::Container).await,
            _ => self.host.exit_fullscreen().await,
        };
        if let Err(err) = result {
            log::warn!("fullscreen toggle failed: {}", err);
        }
    }

    pub fn on_fullscreen_change(self: &Rc<Self>, target: FullscreenTarget) {
        let reaction = self.fullscreen.borrow_mut().observe(target);
        log::debug!(
            "fullscreen element {:?}: {:?} -> {:?}",
            target,
            reaction,
            self.fullscreen.borrow().state()
        );
        match reaction {
            FullscreenReaction::Entered => {
                self.sync_view_flags();
                self.note_activity();
            }
            FullscreenReaction::Exited => {
                self.controls.borrow_mut().reveal();
                self.sync_view_flags();
            }
            FullscreenReaction::BeginMigration => {
                self.sync_view_flags();
                let this = Rc::clone(self);
                self.host.spawn_local(Box::pin(this.migrate_to_container()));
            }
            FullscreenReaction::Ignored => self.sync_view_flags(),
        }
    }

    /// Move fullscreen from the video element to the container: exit, wait,
    /// re-request, wait, then drop the guard whatever happened.
    async fn migrate_to_container(self: Rc<Self>) {
        log::info!("native video fullscreen detected, moving it to the player container");
        if let Err(err) = self.host.exit_fullscreen().await {
            log::warn!("exit from video fullscreen failed: {}", err);
        }
        tokio::time::sleep(self.config.migration_request_delay()).await;
        match self.host.request_fullscreen(FullscreenTarget::Container).await {
            Ok(()) => log::debug!("container fullscreen requested"),
            Err(err) => log::warn!("could not move fullscreen to the player container: {}", err),
        }
        tokio::time::sleep(self.config.migration_settle_delay()).await;
        self.fullscreen.borrow_mut().finish_migration();
        self.sync_view_flags();
    }

    // ── Controls visibility ─────────────────────────────────────────

    /// Pointer moved over the container (or fullscreen was entered): show
    /// the controls and push the idle deadline out.
    pub fn note_activity(self: &Rc<Self>) {
        let deadline = Instant::now() + self.config.controls_hide_delay();
        let spawn = self.controls.borrow_mut().rearm(deadline);
        self.sync_view_flags();
        if spawn {
            let this = Rc::clone(self);
            self.host.spawn_local(Box::pin(this.run_inactivity_timer()));
        }
    }

    async fn run_inactivity_timer(self: Rc<Self>) {
        let Some(mut deadline) = self.controls.borrow().deadline() else {
            return;
        };
        loop {
            tokio::time::sleep_until(deadline).await;
            let fullscreen_active = self.fullscreen.borrow().is_container_active();
            let check = self.controls.borrow_mut().check(Instant::now(), fullscreen_active);
            match check {
                IdleCheck::SleepUntil(next) => deadline = next,
                IdleCheck::Hidden => {
                    log::debug!("hiding controls after inactivity");
                    self.sync_view_flags();
                    return;
                }
                IdleCheck::Expired => return,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::{Fullscreen, LocalTask, MediaElement, Presenter};
    use crate::core::media::{FileOrigin, SourceUrl};
    use std::future::Future;
    use std::time::Duration;

    #[derive(Debug)]
    struct FakeState {
        position: f64,
        rate: f64,
        max_rate: f64,
        fullscreen: FullscreenTarget,
        reject_fullscreen: bool,
        reject_play: bool,
        next_url: u64,
        loaded: Vec<SourceUrl>,
        revoked: Vec<SourceUrl>,
        discarded: Vec<u64>,
        plays: usize,
        exit_calls: usize,
        requests: Vec<FullscreenTarget>,
        alerts: Vec<String>,
        presented: usize,
    }

    impl Default for FakeState {
        fn default() -> Self {
            Self {
                position: 0.0,
                rate: 1.0,
                max_rate: 16.0,
                fullscreen: FullscreenTarget::None,
                reject_fullscreen: false,
                reject_play: false,
                next_url: 0,
                loaded: Vec::new(),
                revoked: Vec::new(),
                discarded: Vec::new(),
                plays: 0,
                exit_calls: 0,
                requests: Vec::new(),
                alerts: Vec::new(),
                presented: 0,
            }
        }
    }

    /// Stands in for the web view; behaves like a browser that never sends
    /// notifications on its own.
    struct FakeHost {
        state: Rc<RefCell<FakeState>>,
    }

    impl MediaElement for FakeHost {
        async fn position(&self) -> PlayerResult<f64> {
            Ok(self.state.borrow().position)
        }

        async fn set_position(&self, seconds: f64) -> PlayerResult<()> {
            self.state.borrow_mut().position = seconds;
            Ok(())
        }

        async fn playback_rate(&self) -> PlayerResult<f64> {
            Ok(self.state.borrow().rate)
        }

        async fn set_playback_rate(&self, rate: f64) -> PlayerResult<()> {
            let mut state = self.state.borrow_mut();
            if rate > state.max_rate {
                return Err(PlayerError::Rejected(format!("rate {rate} not supported")));
            }
            state.rate = rate;
            Ok(())
        }

        async fn create_source_url(&self, file: &IncomingFile) -> PlayerResult<SourceUrl> {
            let mut state = self.state.borrow_mut();
            state.next_url += 1;
            Ok(SourceUrl(format!("blob:{}-{}", state.next_url, file.name)))
        }

        async fn revoke_source_url(&self, url: &SourceUrl) -> PlayerResult<()> {
            self.state.borrow_mut().revoked.push(url.clone());
            Ok(())
        }

        async fn discard_file(&self, token: u64) -> PlayerResult<()> {
            self.state.borrow_mut().discarded.push(token);
            Ok(())
        }

        async fn load_source(&self, url: &SourceUrl) -> PlayerResult<()> {
            let mut state = self.state.borrow_mut();
            state.loaded.push(url.clone());
            state.position = 0.0;
            Ok(())
        }

        async fn play(&self) -> PlayerResult<()> {
            let mut state = self.state.borrow_mut();
            if state.reject_play {
                return Err(PlayerError::Rejected("NotAllowedError".into()));
            }
            state.plays += 1;
            Ok(())
        }
    }

    impl Fullscreen for FakeHost {
        async fn fullscreen_element(&self) -> PlayerResult<FullscreenTarget> {
            Ok(self.state.borrow().fullscreen)
        }

        async fn request_fullscreen(&self, target: FullscreenTarget) -> PlayerResult<()> {
            let mut state = self.state.borrow_mut();
            state.requests.push(target);
            if state.reject_fullscreen {
                return Err(PlayerError::Rejected("not a user gesture".into()));
            }
            state.fullscreen = target;
            Ok(())
        }

        async fn exit_fullscreen(&self) -> PlayerResult<()> {
            let mut state = self.state.borrow_mut();
            state.exit_calls += 1;
            state.fullscreen = FullscreenTarget::None;
            Ok(())
        }
    }

    impl Presenter for FakeHost {
        fn present(&self, _view: &PlayerView) {
            self.state.borrow_mut().presented += 1;
        }

        fn alert(&self, message: &str) {
            self.state.borrow_mut().alerts.push(message.to_string());
        }

        fn spawn_local(&self, task: LocalTask) {
            tokio::task::spawn_local(task);
        }
    }

    fn fake_player() -> (Rc<PlayerController<FakeHost>>, Rc<RefCell<FakeState>>) {
        let state = Rc::new(RefCell::new(FakeState::default()));
        let host = FakeHost { state: Rc::clone(&state) };
        (PlayerController::new(host, PlayerConfig::default()), state)
    }

    async fn local<F: Future<Output = ()>>(test: F) {
        tokio::task::LocalSet::new().run_until(test).await;
    }

    async fn advance_ms(ms: u64) {
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }

    fn video(token: u64, name: &str, mime: &str, origin: FileOrigin) -> IncomingFile {
        IncomingFile {
            token,
            name: name.to_string(),
            mime: mime.to_string(),
            size: 2048,
            origin,
        }
    }

    #[tokio::test]
    async fn test_rewind_clamps_at_zero() {
        let (player, state) = fake_player();
        state.borrow_mut().position = 4.0;
        player.seek(SeekDirection::Backward).await;
        assert_eq!(state.borrow().position, 0.0);

        state.borrow_mut().position = 20.0;
        player.seek(SeekDirection::Forward).await;
        assert_eq!(state.borrow().position, 30.0);
    }

    #[tokio::test]
    async fn test_speed_steps_never_drop_below_floor() {
        let (player, state) = fake_player();
        for _ in 0..30 {
            player.adjust_speed(SpeedStep::Slower).await;
            assert!(state.borrow().rate >= 0.1);
        }
        assert_eq!(state.borrow().rate, 0.1);
        assert_eq!(player.view().rate_text, "0.10x");

        player.adjust_speed(SpeedStep::Faster).await;
        assert_eq!(state.borrow().rate, 0.15);
        assert_eq!(player.view().rate_text, "0.15x");
    }

    #[tokio::test]
    async fn test_rate_entry_forms() {
        for entry in ["2x", "2", " 2.0 "] {
            let (player, state) = fake_player();
            player.commit_rate_entry(entry).await;
            assert_eq!(state.borrow().rate, 2.0, "entry {entry:?}");
            assert_eq!(player.view().rate_text, "2.00x");
        }
    }

    #[tokio::test]
    async fn test_invalid_rate_entry_redisplays_current_rate() {
        for entry in ["abc", "-1"] {
            let (player, state) = fake_player();
            state.borrow_mut().rate = 1.25;
            player.on_rate_changed(1.25);
            let revision = player.view().rate_revision;

            player.commit_rate_entry(entry).await;
            assert_eq!(state.borrow().rate, 1.25);
            let view = player.view();
            assert_eq!(view.rate_text, "1.25x");
            assert!(view.rate_revision > revision, "field must be reset for {entry:?}");
        }
    }

    #[tokio::test]
    async fn test_refused_rate_shows_actual_rate() {
        let (player, state) = fake_player();
        player.commit_rate_entry("40x").await;
        assert_eq!(state.borrow().rate, 1.0);
        assert_eq!(player.view().rate_text, "1.00x");
    }

    #[tokio::test]
    async fn test_native_rate_change_updates_readout() {
        let (player, _state) = fake_player();
        player.handle_event(HostEvent::RateChange { rate: 1.75 }).await;
        assert_eq!(player.view().rate_text, "1.75x");
    }

    #[tokio::test]
    async fn test_dropped_non_video_is_rejected() {
        let (player, state) = fake_player();
        player
            .drop_file(Some(video(9, "notes.txt", "text/plain", FileOrigin::Drop)))
            .await;
        let state = state.borrow();
        assert_eq!(state.alerts, vec![INVALID_DROP_MESSAGE.to_string()]);
        assert_eq!(state.discarded, vec![9]);
        assert!(state.loaded.is_empty());
        assert!(player.view().source_name.is_none());
    }

    #[tokio::test]
    async fn test_drop_without_file_alerts() {
        let (player, state) = fake_player();
        player.set_drag_hover(true);
        player.handle_event(HostEvent::FileDropped { file: None }).await;
        assert_eq!(state.borrow().alerts.len(), 1);
        assert!(!player.view().drag_hover);
    }

    #[tokio::test]
    async fn test_rejected_drop_keeps_current_source() {
        let (player, state) = fake_player();
        player.open_file(video(1, "a.mp4", "video/mp4", FileOrigin::Picker)).await;
        player
            .drop_file(Some(video(2, "b.png", "image/png", FileOrigin::Drop)))
            .await;
        assert_eq!(state.borrow().loaded.len(), 1);
        assert_eq!(player.view().source_name.as_deref(), Some("a.mp4"));
    }

    #[tokio::test]
    async fn test_accepted_file_loads_and_plays() {
        let (player, state) = fake_player();
        state.borrow_mut().position = 42.0;
        player
            .drop_file(Some(video(1, "a.mp4", "video/mp4", FileOrigin::Drop)))
            .await;
        {
            let state = state.borrow();
            assert_eq!(state.loaded.len(), 1);
            assert_eq!(state.plays, 1);
            assert_eq!(state.position, 0.0);
            assert!(state.alerts.is_empty());
        }
        assert_eq!(player.view().status, "Playing a.mp4");
    }

    #[tokio::test]
    async fn test_replaced_source_is_revoked() {
        let (player, state) = fake_player();
        player.open_file(video(1, "a.mp4", "video/mp4", FileOrigin::Picker)).await;
        player.open_file(video(2, "b.mp4", "video/mp4", FileOrigin::Picker)).await;
        let state = state.borrow();
        assert_eq!(state.revoked, vec![state.loaded[0].clone()]);
    }

    #[tokio::test]
    async fn test_refused_autoplay_still_binds_source() {
        let (player, state) = fake_player();
        state.borrow_mut().reject_play = true;
        player.open_file(video(1, "a.mp4", "video/mp4", FileOrigin::Picker)).await;
        assert_eq!(player.view().source_name.as_deref(), Some("a.mp4"));
    }

    #[tokio::test]
    async fn test_hotkeys_seek_unless_typing() {
        let (player, state) = fake_player();
        state.borrow_mut().position = 50.0;
        let press = KeyPress {
            key: "j".to_string(),
            ..Default::default()
        };
        player.on_key(&press).await;
        assert_eq!(state.borrow().position, 40.0);

        let typing = KeyPress {
            key: "l".to_string(),
            editable: true,
            ..Default::default()
        };
        player.on_key(&typing).await;
        assert_eq!(state.borrow().position, 40.0);

        let forward = KeyPress {
            key: "l".to_string(),
            ..Default::default()
        };
        player.on_key(&forward).await;
        assert_eq!(state.borrow().position, 50.0);
    }

    #[tokio::test]
    async fn test_toggle_requests_then_exits() {
        let (player, state) = fake_player();
        player.toggle_fullscreen().await;
        assert_eq!(state.borrow().fullscreen, FullscreenTarget::Container);
        player.toggle_fullscreen().await;
        assert_eq!(state.borrow().fullscreen, FullscreenTarget::None);
        assert_eq!(state.borrow().exit_calls, 1);
    }

    #[tokio::test]
    async fn test_rejected_toggle_changes_nothing() {
        let (player, state) = fake_player();
        state.borrow_mut().reject_fullscreen = true;
        player.toggle_fullscreen().await;
        assert_eq!(state.borrow().fullscreen, FullscreenTarget::None);
        assert!(!player.view().fullscreen_active);
    }

    #[tokio::test(start_paused = true)]
    async fn test_native_video_fullscreen_migrates_to_container() {
        local(async {
            let (player, state) = fake_player();
            state.borrow_mut().fullscreen = FullscreenTarget::Video;
            player.on_fullscreen_change(FullscreenTarget::Video);
            assert!(player.migration_in_flight());

            advance_ms(2_000).await;
            assert_eq!(state.borrow().fullscreen, FullscreenTarget::Container);
            assert_eq!(state.borrow().requests, vec![FullscreenTarget::Container]);
            assert!(!player.migration_in_flight());

            player.on_fullscreen_change(FullscreenTarget::Container);
            assert!(player.view().fullscreen_active);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_native_triggers_start_one_migration() {
        local(async {
            let (player, state) = fake_player();
            player.on_fullscreen_change(FullscreenTarget::Video);
            player.on_fullscreen_change(FullscreenTarget::Video);
            advance_ms(50).await;
            player.on_fullscreen_change(FullscreenTarget::Video);

            advance_ms(2_000).await;
            assert_eq!(state.borrow().exit_calls, 1);
            assert_eq!(state.borrow().requests.len(), 1);
            assert!(!player.migration_in_flight());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_guard_is_held_until_settle_delay() {
        local(async {
            let (player, _state) = fake_player();
            player.on_fullscreen_change(FullscreenTarget::Video);
            advance_ms(150 + 900).await;
            assert!(player.migration_in_flight());
            advance_ms(200).await;
            assert!(!player.migration_in_flight());
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_rejected_migration_stays_windowed_and_recovers() {
        local(async {
            let (player, state) = fake_player();
            state.borrow_mut().reject_fullscreen = true;
            player.on_fullscreen_change(FullscreenTarget::Video);
            player.on_fullscreen_change(FullscreenTarget::None);

            advance_ms(2_000).await;
            assert_eq!(state.borrow().fullscreen, FullscreenTarget::None);
            assert!(!player.migration_in_flight());
            assert!(!player.view().fullscreen_active);

            player.on_fullscreen_change(FullscreenTarget::Video);
            assert!(player.migration_in_flight());
            advance_ms(2_000).await;
            assert_eq!(state.borrow().exit_calls, 2);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_controls_never_hide_outside_fullscreen() {
        local(async {
            let (player, _state) = fake_player();
            player.note_activity();
            advance_ms(60_000).await;
            assert!(player.view().controls_visible);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_controls_hide_after_idle_in_fullscreen() {
        local(async {
            let (player, _state) = fake_player();
            player.on_fullscreen_change(FullscreenTarget::Container);
            assert!(player.view().controls_visible);

            advance_ms(7_900).await;
            assert!(player.view().controls_visible);
            player.note_activity();

            advance_ms(7_900).await;
            assert!(player.view().controls_visible);
            advance_ms(200).await;
            assert!(!player.view().controls_visible);

            player.note_activity();
            assert!(player.view().controls_visible);
            advance_ms(8_100).await;
            assert!(!player.view().controls_visible);
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_controls_reappear_on_fullscreen_exit_and_entry() {
        local(async {
            let (player, _state) = fake_player();
            player.on_fullscreen_change(FullscreenTarget::Container);
            advance_ms(8_100).await;
            assert!(!player.view().controls_visible);

            player.on_fullscreen_change(FullscreenTarget::None);
            let view = player.view();
            assert!(view.controls_visible);
            assert!(!view.fullscreen_active);

            advance_ms(20_000).await;
            player.on_fullscreen_change(FullscreenTarget::Container);
            assert!(player.view().controls_visible);
            assert!(player.view().fullscreen_active);
        })
        .await;
    }

    #[tokio::test]
    async fn test_unchanged_view_is_not_presented_again() {
        let (player, state) = fake_player();
        player.set_drag_hover(true);
        player.set_drag_hover(true);
        assert_eq!(state.borrow().presented, 1);
    }
}
