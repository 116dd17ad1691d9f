//! App-wide yewdux store slices.
//!
//! # Design
//! - Keep shared UI state in one store to avoid ad-hoc contexts.
//! - Small, focused slices so reducers stay predictable; per-view transient
//!   state (forms, chart data) stays in component state.

use crate::core::session::SessionSlice;
use crate::features::materials::state::MaterialsState;
use crate::features::themes::state::ThemesState;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Session token + profile, shared by every layout.
    pub session: SessionSlice,
    /// Theme list state.
    pub themes: ThemesState,
    /// Materials list/selection state.
    pub materials: MaterialsState,
}
