//! Save, load and clear the single bank details record in a local store.

use crate::bank_details::{BankDetails, StoredBankDetails};
use crate::charts::DashboardView;
use crate::constants::BANK_DETAILS_STORAGE_KEY;
use crate::error::Result;
use crate::local_store::LocalStore;

/// The record slot of one local store. At most one record exists per slot.
#[derive(Debug)]
pub struct RecordStore<S> {
    store: S,
    key: String,
}

impl<S: LocalStore> RecordStore<S> {
    /// Slot under the standard `bankDetailsData` key.
    pub fn new(store: S) -> Self {
        Self::with_key(store, BANK_DETAILS_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Overwrite the slot with `record`.
    pub fn save(&mut self, record: &BankDetails) -> Result<()> {
        let raw = serde_json::to_string(record)?;
        self.store.set_item(&self.key, &raw)?;
        tracing::debug!(key = %self.key, bytes = raw.len(), "bank details saved");
        Ok(())
    }

    /// The raw stored string, if any.
    pub fn load_raw(&self) -> Result<Option<String>> {
        self.store.get_item(&self.key)
    }

    /// The stored record, or `None` when absent or not parsable.
    pub fn load(&self) -> Result<Option<StoredBankDetails>> {
        Ok(self.load_raw()?.as_deref().and_then(StoredBankDetails::parse))
    }

    /// Dashboard view of the slot. Storage failures degrade to the empty state.
    pub fn dashboard(&self) -> DashboardView {
        match self.load_raw() {
            Ok(raw) => DashboardView::from_stored(raw.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "failed to read bank details");
                DashboardView::empty()
            },
        }
    }

    /// Drop the record, as logout does.
    pub fn clear(&mut self) -> Result<()> {
        self.store.remove_item(&self.key)
    }
}
