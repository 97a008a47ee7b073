use crate::{create_flowlist, main_menu, Document, Element, Identifiers, NoTooltip, Tooltip};
use chrono::{Datelike, Local};
use tokio::sync::oneshot;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InitState {
    Uninitialized,
    Initialized,
}

/// Which steps of an initialization actually changed the page.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InitReport {
    pub year_written: bool,
    pub menu_rendered: bool,
    pub tooltips_activated: bool,
}

pub struct PageInitializer<T: Tooltip = NoTooltip> {
    identifiers: Identifiers,
    tooltip: T,
    state: InitState,
}

impl PageInitializer<NoTooltip> {
    pub fn new() -> PageInitializer<NoTooltip> {
        PageInitializer::with_tooltip(NoTooltip)
    }
}

impl Default for PageInitializer<NoTooltip> {
    fn default() -> Self {
        PageInitializer::new()
    }
}

impl<T: Tooltip> PageInitializer<T> {
    pub fn with_tooltip(tooltip: T) -> PageInitializer<T> {
        PageInitializer {
            identifiers: Identifiers::default(),
            tooltip,
            state: InitState::Uninitialized,
        }
    }

    pub fn identifiers(mut self, identifiers: Identifiers) -> PageInitializer<T> {
        self.identifiers = identifiers;
        self
    }

    pub fn state(&self) -> InitState {
        self.state
    }

    /// Waits for the structure-ready signal, then initializes the page. A
    /// sender dropped without firing means the page never became ready.
    pub async fn initialize_when_ready<D: Document>(
        &mut self,
        ready: oneshot::Receiver<()>,
        document: &mut D,
    ) -> InitReport {
        match ready.await {
            Ok(()) => self.initialize(document),
            Err(_) => {
                log::debug!("Ready signal dropped, page left uninitialized.");
                InitReport::default()
            }
        }
    }

    pub fn initialize<D: Document>(&mut self, document: &mut D) -> InitReport {
        self.initialize_for_year(document, Local::now().year())
    }

    pub fn initialize_for_year<D: Document>(&mut self, document: &mut D, year: i32) -> InitReport {
        let mut report = InitReport::default();
        if self.state == InitState::Initialized {
            return report;
        }

        match document.get_element_by_id(self.identifiers.year_element) {
            Some(element) => {
                element.set_text_content(&year.to_string());
                report.year_written = true;
            }
            None => log::trace!("No #{} element, year skipped.", self.identifiers.year_element),
        }

        match document.get_element_by_id(self.identifiers.menu_container) {
            Some(element) => {
                element.set_inner_html(&create_flowlist(main_menu(), false, true));
                report.menu_rendered = true;
            }
            None => log::trace!("No #{} element, menu skipped.", self.identifiers.menu_container),
        }

        if self.tooltip.is_available() {
            self.tooltip.activate(self.identifiers.tooltip_selector);
            report.tooltips_activated = true;
        }

        self.state = InitState::Initialized;
        log::debug!("Page initialized ({:?}).", report);
        report
    }
}
