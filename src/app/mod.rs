// Application state management
//
// This module contains the main AppState struct: the loaded portfolio,
// section navigation, carousel and reveal state, and the background
// animation loop with its visibility handling.

pub mod carousel;
pub mod config;
pub mod event;
pub mod reveal;

// Re-export config types for convenience
pub use config::{BackgroundSettings, FrameConfig};

use crate::portfolio::{Portfolio, PortfolioError, LOAD_FAILURE_MESSAGE};
use crate::sim::scheduler::BackgroundLoop;
use crate::sim::Simulation;
use carousel::{Carousel, ImageCycler};
use config::{
    viewport_units, CARD_GAP, CERT_CARD_WIDTH, FRAME_STEP_MS, HEADER_SCROLL_THRESHOLD,
    JOURNEY_CARD_WIDTH, MAX_FRAME_MS, MIN_FRAME_MS, TAB_SCROLL_STEP, UI_POLL_INTERVAL,
};
use reveal::RevealTracker;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Gap between project tabs in cells
const TAB_GAP: usize = 1;

/// Portfolio sections, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Section {
    #[default]
    About,
    Journey,
    Projects,
    Toolkit,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Journey,
        Section::Projects,
        Section::Toolkit,
        Section::Certifications,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Journey => "Journey",
            Self::Projects => "Projects",
            Self::Toolkit => "Toolkit",
            Self::Certifications => "Certifications",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Startup options (from the command line)
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub frame_ms: u64,
    /// Fixed seed for the background; None seeds from OS entropy
    pub seed: Option<u64>,
    /// Run the animated background at all
    pub background: bool,
    /// Terminal size in cells (columns, rows)
    pub terminal_size: (u16, u16),
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            frame_ms: config::DEFAULT_FRAME_MS,
            seed: None,
            background: true,
            terminal_size: (120, 40),
        }
    }
}

/// Content-space (start, width) of each project tab label
pub fn project_tab_spans(portfolio: &Portfolio) -> Vec<(usize, usize)> {
    let mut start = 0;
    portfolio
        .projects
        .iter()
        .map(|p| {
            let width = project_tab_label(&p.name).width();
            let span = (start, width);
            start += width + TAB_GAP;
            span
        })
        .collect()
}

/// Label of a project tab
pub fn project_tab_label(name: &str) -> String {
    format!(" {} ", name)
}

/// Main application state
pub struct AppState {
    /// Whether the application is running
    pub running: bool,

    /// Loaded document (empty when loading failed)
    pub portfolio: Portfolio,

    /// User-facing load failure message, if loading failed
    pub load_error: Option<String>,

    /// Section currently shown
    pub section: Section,

    /// Vertical scroll of the current section, in lines
    pub scroll_y: u16,

    /// Largest useful vertical scroll, updated during layout
    pub max_scroll_y: u16,

    /// Career timeline carousel
    pub journey: Carousel,

    /// Timeline card whose detail modal is open
    pub journey_modal: Option<usize>,

    /// Certifications carousel
    pub certifications: Carousel,

    /// Project tab strip
    pub project_tabs: Carousel,

    /// Selected project tab
    pub selected_project: usize,

    /// Image carousel of the selected project
    pub project_images: ImageCycler,

    /// Fade-in state of the cards
    pub reveal: RevealTracker,

    /// Animated background, None when disabled on the command line
    pub background: Option<BackgroundLoop>,

    /// Background visual settings
    pub background_settings: BackgroundSettings,

    /// Frame pacing
    pub frame_config: FrameConfig,

    /// Whether the terminal reported losing focus
    focus_lost: bool,
}

impl AppState {
    /// Build the state from the load result
    pub fn new(loaded: Result<Portfolio, PortfolioError>, options: AppOptions) -> Self {
        let now = Instant::now();
        let frame_config = FrameConfig::new(options.frame_ms);

        let (portfolio, load_error) = match loaded {
            Ok(portfolio) => (portfolio, None),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching portfolio data");
                (Portfolio::default(), Some(LOAD_FAILURE_MESSAGE.to_string()))
            }
        };

        let background = options.background.then(|| {
            let (width, height) = viewport_units(options.terminal_size.0, options.terminal_size.1);
            let sim = match options.seed {
                Some(seed) => Simulation::with_seed(width, height, seed),
                None => Simulation::from_entropy(width, height),
            };
            BackgroundLoop::start(sim, frame_config.frame_interval(), now)
        });

        let mut state = Self {
            running: true,
            portfolio,
            load_error,
            section: Section::default(),
            scroll_y: 0,
            max_scroll_y: 0,
            journey: Carousel::cards(JOURNEY_CARD_WIDTH, CARD_GAP),
            journey_modal: None,
            certifications: Carousel::cards(CERT_CARD_WIDTH, CARD_GAP),
            project_tabs: Carousel::strip(TAB_SCROLL_STEP),
            selected_project: 0,
            project_images: ImageCycler::default(),
            reveal: RevealTracker::new(),
            background,
            background_settings: BackgroundSettings::default(),
            frame_config,
            focus_lost: false,
        };
        state.populate();
        state
    }

    /// Size every carousel to the loaded document
    fn populate(&mut self) {
        self.journey.set_items(self.portfolio.journey.len());
        self.certifications
            .set_items(self.portfolio.certifications.len());
        let tab_width = project_tab_spans(&self.portfolio)
            .last()
            .map(|(start, width)| start + width)
            .unwrap_or(0);
        self.project_tabs.set_content_width(tab_width);
        self.select_project(0);
    }

    // ------------------------------------------------------------------
    // Background loop
    // ------------------------------------------------------------------

    /// Run the background frame if due; returns whether one was rendered
    pub fn on_frame(&mut self, now: Instant) -> bool {
        self.background
            .as_mut()
            .map(|bg| bg.tick(now))
            .unwrap_or(false)
    }

    /// How long the event loop may wait before something needs doing
    pub fn next_wakeup(&self, now: Instant) -> Duration {
        self.background
            .as_ref()
            .and_then(|bg| bg.time_until_next_frame(now))
            .map(|d| d.min(UI_POLL_INTERVAL))
            .unwrap_or(UI_POLL_INTERVAL)
    }

    /// Terminal resized: re-measure the background surface only
    pub fn on_resize(&mut self, columns: u16, rows: u16) {
        let (width, height) = viewport_units(columns, rows);
        if let Some(bg) = self.background.as_mut() {
            bg.resize(width, height);
        }
        tracing::debug!(columns, rows, "Terminal resized");
    }

    /// Terminal focus changed; an unfocused terminal counts as hidden
    pub fn on_focus_change(&mut self, focused: bool) {
        self.focus_lost = !focused;
        self.sync_visibility();
    }

    /// Whether the background is currently considered hidden
    pub fn background_hidden(&self) -> bool {
        self.focus_lost || !self.background_settings.animations_enabled
    }

    fn sync_visibility(&mut self) {
        let hidden = self.background_hidden();
        if let Some(bg) = self.background.as_mut() {
            bg.set_hidden(hidden, Instant::now());
        }
    }

    /// Show or hide the background animation
    pub fn toggle_animations(&mut self) {
        self.background_settings.animations_enabled = !self.background_settings.animations_enabled;
        self.sync_visibility();
    }

    /// Rebuild the background population for the current size
    pub fn reinitialize_background(&mut self) {
        if let Some(bg) = self.background.as_mut() {
            bg.reinitialize();
        }
    }

    /// Shorten the frame interval (clamp to MIN_FRAME_MS)
    pub fn faster_frames(&mut self) {
        let ms = self.frame_config.frame_ms.saturating_sub(FRAME_STEP_MS);
        self.set_frame_ms(ms.max(MIN_FRAME_MS));
    }

    /// Lengthen the frame interval (clamp to MAX_FRAME_MS)
    pub fn slower_frames(&mut self) {
        let ms = self.frame_config.frame_ms.saturating_add(FRAME_STEP_MS);
        self.set_frame_ms(ms.min(MAX_FRAME_MS));
    }

    fn set_frame_ms(&mut self, ms: u64) {
        self.frame_config.frame_ms = ms;
        self.frame_config.last_change = Some(Instant::now());
        if let Some(bg) = self.background.as_mut() {
            bg.set_frame_interval(self.frame_config.frame_interval());
        }
        tracing::info!(frame_ms = ms, "Frame interval changed");
    }

    // ------------------------------------------------------------------
    // Navigation
    // ------------------------------------------------------------------

    pub fn select_section(&mut self, section: Section) {
        if self.section != section {
            self.section = section;
            self.scroll_y = 0;
            self.max_scroll_y = 0;
            self.journey_modal = None;
        }
    }

    pub fn next_section(&mut self) {
        self.select_section(self.section.next());
    }

    pub fn previous_section(&mut self) {
        self.select_section(self.section.previous());
    }

    pub fn scroll_up(&mut self) {
        self.scroll_y = self.scroll_y.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_y = (self.scroll_y + 1).min(self.max_scroll_y);
    }

    /// Record the vertical extent of the current section (during layout)
    pub fn set_vertical_extent(&mut self, content_lines: u16, viewport_lines: u16) {
        self.max_scroll_y = content_lines.saturating_sub(viewport_lines);
        self.scroll_y = self.scroll_y.min(self.max_scroll_y);
    }

    /// Header turns compact once the page is scrolled down a little
    pub fn header_compact(&self) -> bool {
        self.scroll_y > HEADER_SCROLL_THRESHOLD
    }

    /// Left arrow in the current section
    pub fn move_left(&mut self) {
        match self.section {
            Section::Journey => self.journey.scroll_left(),
            Section::Certifications => self.certifications.scroll_left(),
            Section::Projects => self.previous_project(),
            Section::About | Section::Toolkit => {}
        }
    }

    /// Right arrow in the current section
    pub fn move_right(&mut self) {
        match self.section {
            Section::Journey => self.journey.scroll_right(),
            Section::Certifications => self.certifications.scroll_right(),
            Section::Projects => self.next_project(),
            Section::About | Section::Toolkit => {}
        }
    }

    /// Enter: open the timeline card at the left edge, or close an open one
    pub fn activate(&mut self) {
        if self.section != Section::Journey {
            return;
        }
        if self.journey_modal.is_some() {
            self.journey_modal = None;
        } else if !self.portfolio.journey.is_empty() {
            self.journey_modal = Some(self.journey.leading_index());
        }
    }

    /// Close the journey modal; returns whether one was open
    pub fn close_modal(&mut self) -> bool {
        self.journey_modal.take().is_some()
    }

    pub fn select_project(&mut self, index: usize) {
        let Some(project) = self.portfolio.projects.get(index) else {
            self.selected_project = 0;
            self.project_images.reset(0);
            return;
        };
        self.selected_project = index;
        self.project_images.reset(project.images.len());
        if let Some(&(start, width)) = project_tab_spans(&self.portfolio).get(index) {
            self.project_tabs.ensure_visible(start, width);
        }
    }

    pub fn next_project(&mut self) {
        if self.selected_project + 1 < self.portfolio.projects.len() {
            self.select_project(self.selected_project + 1);
        }
    }

    pub fn previous_project(&mut self) {
        if self.selected_project > 0 {
            self.select_project(self.selected_project - 1);
        }
    }

    /// Step through the selected project's images
    pub fn change_image(&mut self, direction: isize) {
        if self.section == Section::Projects {
            self.project_images.advance(direction);
        }
    }

    /// Scroll the project tab strip (tab arrows)
    pub fn scroll_project_tabs(&mut self, right: bool) {
        if self.section != Section::Projects {
            return;
        }
        if right {
            self.project_tabs.scroll_right();
        } else {
            self.project_tabs.scroll_left();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::portfolio::{Certification, JourneyItem, Project};
    use crate::sim::scheduler::LoopState;

    pub(crate) fn sample_portfolio() -> Portfolio {
        Portfolio {
            name: "Ada Example".to_string(),
            about: "Systems engineer.".to_string(),
            journey: (0..6)
                .map(|i| JourneyItem {
                    title: format!("Role {}", i),
                    date: format!("20{:02}", 10 + i),
                    company: (i % 2 == 0).then(|| "Acme".to_string()),
                    description: "Did things".to_string(),
                })
                .collect(),
            projects: vec![
                Project {
                    name: "Tracer".to_string(),
                    images: vec!["a.png".into(), "b.png".into(), "c.png".into()],
                    ..Default::default()
                },
                Project {
                    name: "Atlas".to_string(),
                    ..Default::default()
                },
            ],
            certifications: (0..4)
                .map(|i| Certification {
                    name: format!("Cert {}", i),
                    issuer: "Vendor".to_string(),
                    date: "2022".to_string(),
                    image: "img/cert.png".to_string(),
                })
                .collect(),
            ..Default::default()
        }
    }

    pub(crate) fn test_app() -> AppState {
        AppState::new(
            Ok(sample_portfolio()),
            AppOptions {
                seed: Some(7),
                terminal_size: (100, 40),
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_new_app_starts_background() {
        let app = test_app();
        let bg = app.background.as_ref().unwrap();
        assert_eq!(bg.state(), LoopState::Running);
        // 100 columns * 8 units / 5 units per point
        assert_eq!(bg.simulation().points().len(), 160);
        assert_eq!(bg.simulation().node_count(), 32);
        assert!(app.load_error.is_none());
    }

    #[test]
    fn test_load_failure_shows_message() {
        let err = Portfolio::load("/no/such/data.json").unwrap_err();
        let app = AppState::new(Err(err), AppOptions::default());
        assert_eq!(app.load_error.as_deref(), Some(LOAD_FAILURE_MESSAGE));
        assert!(app.portfolio.journey.is_empty());
        // Background still runs
        assert!(app.background.is_some());
    }

    #[test]
    fn test_no_background_option() {
        let app = AppState::new(
            Ok(sample_portfolio()),
            AppOptions {
                background: false,
                ..Default::default()
            },
        );
        assert!(app.background.is_none());
        assert_eq!(app.next_wakeup(Instant::now()), UI_POLL_INTERVAL);
    }

    #[test]
    fn test_focus_loss_pauses_background() {
        let mut app = test_app();
        app.on_focus_change(false);
        assert_eq!(app.background.as_ref().unwrap().state(), LoopState::Paused);
        assert!(app.background_hidden());

        app.on_focus_change(true);
        assert_eq!(app.background.as_ref().unwrap().state(), LoopState::Running);
    }

    #[test]
    fn test_animation_toggle_combines_with_focus() {
        let mut app = test_app();
        app.toggle_animations();
        assert_eq!(app.background.as_ref().unwrap().state(), LoopState::Paused);

        // Regaining focus does not resume a background the user turned off
        app.on_focus_change(false);
        app.on_focus_change(true);
        assert_eq!(app.background.as_ref().unwrap().state(), LoopState::Paused);

        app.toggle_animations();
        assert_eq!(app.background.as_ref().unwrap().state(), LoopState::Running);
    }

    #[test]
    fn test_resize_keeps_population() {
        let mut app = test_app();
        app.on_resize(200, 60);
        let sim = app.background.as_ref().unwrap().simulation();
        assert_eq!(sim.points().len(), 160);
        assert_eq!(sim.dimensions(), (1600.0, 960.0));

        app.reinitialize_background();
        let sim = app.background.as_ref().unwrap().simulation();
        assert_eq!(sim.points().len(), 320);
    }

    #[test]
    fn test_frame_interval_clamps() {
        let mut app = test_app();
        for _ in 0..20 {
            app.faster_frames();
        }
        assert_eq!(app.frame_config.frame_ms, MIN_FRAME_MS);
        assert_eq!(
            app.background.as_ref().unwrap().frame_interval(),
            Duration::from_millis(MIN_FRAME_MS)
        );
        for _ in 0..40 {
            app.slower_frames();
        }
        assert_eq!(app.frame_config.frame_ms, MAX_FRAME_MS);
    }

    #[test]
    fn test_section_cycle() {
        let mut app = test_app();
        assert_eq!(app.section, Section::About);
        app.previous_section();
        assert_eq!(app.section, Section::Certifications);
        app.next_section();
        app.next_section();
        assert_eq!(app.section, Section::Journey);
        assert_eq!(Section::from_index(4), Some(Section::Certifications));
        assert_eq!(Section::from_index(5), None);
    }

    #[test]
    fn test_section_change_resets_scroll_and_modal() {
        let mut app = test_app();
        app.select_section(Section::Journey);
        app.activate();
        assert_eq!(app.journey_modal, Some(0));
        app.set_vertical_extent(40, 10);
        app.scroll_down();
        app.scroll_down();
        app.next_section();
        assert_eq!(app.journey_modal, None);
        assert_eq!(app.scroll_y, 0);
    }

    #[test]
    fn test_vertical_scroll_bounds_and_header() {
        let mut app = test_app();
        app.set_vertical_extent(15, 10);
        for _ in 0..10 {
            app.scroll_down();
        }
        assert_eq!(app.scroll_y, 5);
        assert!(app.header_compact());
        for _ in 0..10 {
            app.scroll_up();
        }
        assert_eq!(app.scroll_y, 0);
        assert!(!app.header_compact());
    }

    #[test]
    fn test_journey_modal_follows_scroll() {
        let mut app = test_app();
        app.select_section(Section::Journey);
        app.journey.set_viewport(60);
        app.move_right();
        app.activate();
        assert_eq!(app.journey_modal, Some(1));
        app.activate();
        assert_eq!(app.journey_modal, None);
        app.activate();
        assert!(app.close_modal());
        assert!(!app.close_modal());
    }

    #[test]
    fn test_project_selection_resets_image() {
        let mut app = test_app();
        app.select_section(Section::Projects);
        assert_eq!(app.project_images.len(), 3);
        app.change_image(-1);
        assert_eq!(app.project_images.current(), 2);

        app.move_right();
        assert_eq!(app.selected_project, 1);
        assert_eq!(app.project_images.len(), 0);
        app.move_right();
        assert_eq!(app.selected_project, 1);

        app.move_left();
        assert_eq!(app.selected_project, 0);
        assert_eq!(app.project_images.current(), 0);
    }

    #[test]
    fn test_project_tab_spans() {
        let spans = project_tab_spans(&sample_portfolio());
        // " Tracer " = 8, gap 1, " Atlas " = 7
        assert_eq!(spans, vec![(0, 8), (9, 7)]);
    }

    #[test]
    fn test_empty_portfolio_navigation_is_safe() {
        let mut app = AppState::new(Ok(Portfolio::default()), AppOptions::default());
        for section in Section::ALL {
            app.select_section(section);
            app.move_left();
            app.move_right();
            app.activate();
            app.change_image(1);
            app.scroll_project_tabs(true);
        }
        assert_eq!(app.journey_modal, None);
        assert_eq!(app.selected_project, 0);
    }
}
