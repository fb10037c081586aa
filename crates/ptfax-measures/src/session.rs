//! The measurement rows of one editing session.
//!
//! State is a plain owned record; nothing is cached. Improvements are
//! recomputed from the row's values every time they are read.

use jiff::civil::Date;
use uuid::Uuid;

use ptfax_core::models::measurement::{MeasurementCategory, MeasurementSample};

use crate::error::MeasureError;
use crate::improvement::{self, Improvement};
use crate::presets;

#[derive(Debug, Clone, Default)]
pub struct MeasurementSession {
    initial_date: Option<Date>,
    current_date: Option<Date>,
    rows: Vec<MeasurementSample>,
}

impl MeasurementSession {
    /// Start a session. New rows take `initial_eval_date` as their initial
    /// date and `today` as their current date until either is changed.
    pub fn new(initial_eval_date: Option<Date>, today: Date) -> Self {
        Self {
            initial_date: initial_eval_date,
            current_date: Some(today),
            rows: Vec::new(),
        }
    }

    /// Resume editing rows loaded from a saved report.
    pub fn from_samples(
        samples: Vec<MeasurementSample>,
        initial_date: Option<Date>,
        current_date: Option<Date>,
    ) -> Self {
        Self {
            initial_date,
            current_date,
            rows: samples,
        }
    }

    pub fn initial_date(&self) -> Option<Date> {
        self.initial_date
    }

    pub fn current_date(&self) -> Option<Date> {
        self.current_date
    }

    /// Append a blank row with the category's default unit.
    pub fn add(&mut self, category: MeasurementCategory) -> Uuid {
        self.push(MeasurementSample::new(category))
    }

    /// Append every row of the named preset, returning the new row ids.
    pub fn apply_preset(&mut self, key: &str) -> Result<Vec<Uuid>, MeasureError> {
        let preset = presets::get_preset(key)?;
        let ids = preset
            .items
            .iter()
            .map(|item| {
                self.push(
                    MeasurementSample::new(item.category)
                        .with_description(item.description)
                        .with_unit(item.unit),
                )
            })
            .collect::<Vec<_>>();
        tracing::debug!(preset = key, rows = ids.len(), "applied measurement preset");
        Ok(ids)
    }

    fn push(&mut self, mut sample: MeasurementSample) -> Uuid {
        sample.initial_date = self.initial_date;
        sample.current_date = self.current_date;
        let id = sample.id;
        tracing::debug!(%id, category = %sample.category, "added measurement row");
        self.rows.push(sample);
        id
    }

    pub fn remove(&mut self, id: Uuid) -> Result<MeasurementSample, MeasureError> {
        let index = self
            .rows
            .iter()
            .position(|r| r.id == id)
            .ok_or(MeasureError::RowNotFound(id))?;
        tracing::debug!(%id, "removed measurement row");
        Ok(self.rows.remove(index))
    }

    pub fn get(&self, id: Uuid) -> Result<&MeasurementSample, MeasureError> {
        self.rows
            .iter()
            .find(|r| r.id == id)
            .ok_or(MeasureError::RowNotFound(id))
    }

    pub fn get_mut(&mut self, id: Uuid) -> Result<&mut MeasurementSample, MeasureError> {
        self.rows
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(MeasureError::RowNotFound(id))
    }

    pub fn set_values(
        &mut self,
        id: Uuid,
        initial: impl Into<String>,
        current: impl Into<String>,
    ) -> Result<(), MeasureError> {
        let row = self.get_mut(id)?;
        row.initial_value = initial.into();
        row.current_value = current.into();
        Ok(())
    }

    pub fn set_description(
        &mut self,
        id: Uuid,
        description: impl Into<String>,
    ) -> Result<(), MeasureError> {
        self.get_mut(id)?.description = description.into();
        Ok(())
    }

    pub fn set_unit(&mut self, id: Uuid, unit: impl Into<String>) -> Result<(), MeasureError> {
        self.get_mut(id)?.unit = unit.into();
        Ok(())
    }

    /// Set the initial date and copy it onto every row.
    pub fn set_initial_date(&mut self, date: Date) {
        self.initial_date = Some(date);
        for row in &mut self.rows {
            row.initial_date = Some(date);
        }
        tracing::debug!(%date, rows = self.rows.len(), "propagated initial date");
    }

    /// Set the current date and copy it onto every row.
    pub fn set_current_date(&mut self, date: Date) {
        self.current_date = Some(date);
        for row in &mut self.rows {
            row.current_date = Some(date);
        }
        tracing::debug!(%date, rows = self.rows.len(), "propagated current date");
    }

    /// Adopt the initial evaluation date once it becomes known, unless an
    /// initial date was already chosen for this session.
    pub fn seed_initial_eval_date(&mut self, date: Date) {
        if self.initial_date.is_none() {
            self.set_initial_date(date);
        }
    }

    /// The live improvement for a row, computed from its current values.
    pub fn improvement(&self, id: Uuid) -> Result<Option<Improvement>, MeasureError> {
        let row = self.get(id)?;
        Ok(improvement::calculate(
            row.category,
            &row.initial_value,
            &row.current_value,
            Some(row.effective_unit()),
        ))
    }

    /// Rows of one category in entry order.
    pub fn rows(&self, category: MeasurementCategory) -> impl Iterator<Item = &MeasurementSample> {
        self.rows.iter().filter(move |r| r.category == category)
    }

    pub fn samples(&self) -> &[MeasurementSample] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_samples(self) -> Vec<MeasurementSample> {
        self.rows
    }
}
