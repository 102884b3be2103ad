use crate::config::SessionConfig;
use crate::data::filter::{filtered_indices, FilterSelection, FilteredView, ResolvedFilters};
use crate::data::loader::{load_city, LoadError};
use crate::data::model::{City, TripDataset};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Everything one pass of the dialog works on. Built from scratch on every
/// restart; nothing carries over between iterations.
#[derive(Debug, Clone)]
pub struct Session {
    /// Loaded dataset, with derived time fields.
    pub dataset: TripDataset,

    /// Active month/day filters.
    pub selection: FilterSelection,

    /// Indices of trips passing the filters.
    pub visible_indices: Vec<usize>,
}

impl Session {
    /// Wrap a loaded dataset and apply the filters.
    pub fn new(dataset: TripDataset, selection: FilterSelection) -> Self {
        let visible_indices = filtered_indices(&dataset, &selection);
        Session {
            dataset,
            selection,
            visible_indices,
        }
    }

    /// Load the chosen city's data and apply the resolved filters.
    pub fn load(config: &SessionConfig, filters: &ResolvedFilters) -> Result<Self, LoadError> {
        let dataset = load_city(&config.data_dir, &filters.city)?;
        Ok(Session::new(dataset, filters.selection))
    }

    pub fn city(&self) -> City {
        self.dataset.city
    }

    /// The filtered view over the loaded dataset.
    pub fn view(&self) -> FilteredView<'_> {
        FilteredView::from_indices(&self.dataset, self.visible_indices.clone())
    }
}
