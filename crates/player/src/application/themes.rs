//! Theme card accordion controller

use std::sync::Arc;

use exhibit_domain::{Accordion, AccordionChange, CardIndex, Dataset, DomainError};

use super::{element_ids, ViewportClass};
use crate::ports::outbound::ScrollRequest;

/// One rendered theme card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCardView {
    pub index: CardIndex,
    pub element_id: String,
    pub title: String,
    pub summary: String,
    pub body: Vec<String>,
    pub expanded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeTransition {
    pub change: AccordionChange,
    /// Set when a card expanded on a narrow viewport
    pub scroll: Option<ScrollRequest>,
}

#[derive(Debug, Clone)]
pub struct ThemeController {
    dataset: Arc<Dataset>,
    accordion: Accordion,
}

impl ThemeController {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let accordion = Accordion::new(dataset.themes.len());
        Self { dataset, accordion }
    }

    pub fn cards(&self) -> Vec<ThemeCardView> {
        self.dataset
            .themes
            .iter()
            .enumerate()
            .map(|(i, card)| {
                let index = CardIndex::new(i);
                ThemeCardView {
                    index,
                    element_id: element_ids::theme_card(i),
                    title: card.title.clone(),
                    summary: card.summary.clone(),
                    body: card.body.clone(),
                    expanded: self.accordion.is_expanded(index),
                }
            })
            .collect()
    }

    pub fn expanded(&self) -> Option<CardIndex> {
        self.accordion.expanded()
    }

    /// Collapse `card` if expanded; otherwise collapse the others and expand it
    pub fn toggle(
        &mut self,
        card: CardIndex,
        viewport: ViewportClass,
    ) -> Result<ThemeTransition, DomainError> {
        let change = self.accordion.toggle(card)?;
        tracing::debug!(card = %card, expanded = change.expanded.is_some(), "theme card toggled");

        let scroll = match change.expanded {
            Some(expanded) if viewport.is_narrow() => Some(ScrollRequest::nearest(
                element_ids::theme_card(expanded.get()),
            )),
            _ => None,
        };
        Ok(ThemeTransition { change, scroll })
    }
}
