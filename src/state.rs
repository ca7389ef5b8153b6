//! View state owned by the interactive pieces of the page.
//!
//! Nothing here touches the DOM; components keep these values in hooks and
//! render from them.

use log::debug;

use crate::content::Hotspot;

/// Tracks whether the viewport has been scrolled past a fixed threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    threshold: f64,
    past_threshold: bool,
}

impl ScrollState {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            past_threshold: false,
        }
    }

    /// Records a new scroll offset. Returns `true` when the flag flipped.
    pub fn update(&mut self, offset: f64) -> bool {
        let past = offset > self.threshold;
        let flipped = past != self.past_threshold;
        self.past_threshold = past;
        flipped
    }

    pub fn is_past_threshold(&self) -> bool {
        self.past_threshold
    }
}

/// Open/closed flag of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }
}

/// Which hotspot of a fixed set is currently highlighted.
///
/// The selection can only ever point at one of the ids it was built from;
/// requests for anything else are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotspotSelection {
    ids: Vec<u32>,
    active_id: u32,
}

impl HotspotSelection {
    /// Starts on the first hotspot. Returns `None` for an empty set.
    pub fn new(hotspots: &[Hotspot]) -> Option<Self> {
        let ids: Vec<u32> = hotspots.iter().map(|spot| spot.id).collect();
        let active_id = *ids.first()?;
        Some(Self { ids, active_id })
    }

    pub fn active_id(&self) -> u32 {
        self.active_id
    }

    pub fn is_active(&self, id: u32) -> bool {
        self.active_id == id
    }

    /// Highlights `id`. Returns `true` only when the selection changed.
    pub fn select(&mut self, id: u32) -> bool {
        if !self.ids.contains(&id) {
            debug!("Ignoring selection of unknown hotspot {}", id);
            return false;
        }
        if self.active_id == id {
            return false;
        }
        self.active_id = id;
        true
    }

    pub fn active<'a>(&self, hotspots: &'a [Hotspot]) -> Option<&'a Hotspot> {
        hotspots.iter().find(|spot| spot.id == self.active_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Position;

    fn hotspot(id: u32) -> Hotspot {
        Hotspot {
            id,
            position: Position { x: 10.0, y: 20.0 },
            title: format!("Spot {}", id),
            description: String::new(),
        }
    }

    fn three_hotspots() -> Vec<Hotspot> {
        vec![hotspot(0), hotspot(1), hotspot(2)]
    }

    #[test]
    fn scroll_flag_matches_offset_comparison() {
        for offset in [0.0, 10.0, 49.0, 49.9, 50.0, 50.1, 51.0, 500.0] {
            let mut state = ScrollState::new(50.0);
            state.update(offset);
            assert_eq!(state.is_past_threshold(), offset > 50.0, "offset {}", offset);
        }
    }

    #[test]
    fn scroll_flag_flips_once_per_crossing() {
        let mut state = ScrollState::new(50.0);
        let flips: Vec<bool> = [10.0, 30.0, 60.0, 80.0, 120.0, 40.0, 0.0]
            .into_iter()
            .map(|offset| state.update(offset))
            .collect();
        assert_eq!(flips, vec![false, false, true, false, false, true, false]);
    }

    #[test]
    fn scrolling_down_then_up_reports_expected_sequence() {
        let mut state = ScrollState::new(50.0);
        let seen: Vec<bool> = [0.0, 60.0, 40.0]
            .into_iter()
            .map(|offset| {
                state.update(offset);
                state.is_past_threshold()
            })
            .collect();
        assert_eq!(seen, vec![false, true, false]);
    }

    #[test]
    fn menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn menu_toggle_twice_restores_state() {
        for start_open in [false, true] {
            let mut menu = MenuState::default();
            if start_open {
                menu.open();
            }
            let before = menu;
            menu.toggle();
            assert_ne!(menu, before);
            menu.toggle();
            assert_eq!(menu, before);
        }
    }

    #[test]
    fn menu_close_after_open() {
        let mut menu = MenuState::default();
        menu.open();
        assert!(menu.is_open());
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn selection_starts_on_first_hotspot() {
        let hotspots = vec![hotspot(7), hotspot(3), hotspot(9)];
        let selection = HotspotSelection::new(&hotspots).expect("non-empty set");
        assert_eq!(selection.active_id(), 7);
        assert_eq!(selection.active(&hotspots).map(|s| s.id), Some(7));
    }

    #[test]
    fn selection_of_empty_set_is_none() {
        assert!(HotspotSelection::new(&[]).is_none());
    }

    #[test]
    fn select_known_id_round_trips() {
        let hotspots = three_hotspots();
        let mut selection = HotspotSelection::new(&hotspots).expect("non-empty set");
        for spot in &hotspots {
            selection.select(spot.id);
            assert_eq!(selection.active_id(), spot.id);
            assert!(selection.is_active(spot.id));
        }
    }

    #[test]
    fn select_unknown_id_is_noop() {
        let hotspots = three_hotspots();
        let mut selection = HotspotSelection::new(&hotspots).expect("non-empty set");
        selection.select(2);
        assert!(!selection.select(42));
        assert_eq!(selection.active_id(), 2);
    }

    #[test]
    fn reselecting_active_hotspot_is_not_a_change() {
        let hotspots = three_hotspots();
        let mut selection = HotspotSelection::new(&hotspots).expect("non-empty set");
        assert!(!selection.select(0));
    }

    #[test]
    fn select_sequence_counts_three_changes() {
        let hotspots = three_hotspots();
        let mut selection = HotspotSelection::new(&hotspots).expect("non-empty set");
        let changes = [1, 2, 1]
            .into_iter()
            .filter(|id| selection.select(*id))
            .count();
        assert_eq!(selection.active_id(), 1);
        assert_eq!(changes, 3);
    }
}
