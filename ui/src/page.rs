use std::collections::BTreeMap;
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

/// The element ids the controller depends on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
)]
#[strum(serialize_all = "camelCase")]
pub enum ElementId {
    MoodInput,
    AnalyzeMoodBtn,
    SentimentAnalysis,
    RecommendationsSection,
    RecommendationsList,
    SearchInput,
    SearchBtn,
    SearchResults,
    ProductsList,
    ProductModal,
    ModalTitle,
    ModalBody,
}

impl ElementId {
    /// Label a trigger button shows when idle.
    pub fn default_label(&self) -> &'static str {
        match self {
            ElementId::AnalyzeMoodBtn => "Get Recommendations",
            ElementId::SearchBtn => "Search",
            _ => "",
        }
    }

    /// Label a trigger button shows while its flow is in flight.
    pub fn busy_label(&self) -> &'static str {
        match self {
            ElementId::AnalyzeMoodBtn => "Analyzing your mood...",
            ElementId::SearchBtn => "Searching...",
            _ => "",
        }
    }

    pub fn is_button(&self) -> bool {
        matches!(self, ElementId::AnalyzeMoodBtn | ElementId::SearchBtn)
    }

    pub fn is_input(&self) -> bool {
        matches!(self, ElementId::MoodInput | ElementId::SearchInput)
    }
}

/// State of one page element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Inner markup of containers.
    pub html: String,
    /// Current text of inputs.
    pub value: String,
    /// Caption of buttons.
    pub label: String,
    pub disabled: bool,
    pub hidden: bool,
    pub scrolled_into_view: bool,
}

/// In-memory page: every element the flows touch, plus the alerts raised so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    elements: BTreeMap<ElementId, Element>,
    alerts: Vec<String>,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    /// Initial layout: idle buttons, hidden recommendations and modal.
    pub fn new() -> Self {
        let elements = ElementId::iter()
            .map(|id| {
                let element = Element {
                    label: id.default_label().to_string(),
                    hidden: matches!(
                        id,
                        ElementId::RecommendationsSection | ElementId::ProductModal
                    ),
                    ..Default::default()
                };
                (id, element)
            })
            .collect();
        Self {
            elements,
            alerts: Vec::new(),
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    fn element_mut(&mut self, id: ElementId) -> &mut Element {
        self.elements.entry(id).or_default()
    }

    pub fn elements(&self) -> impl Iterator<Item = (&ElementId, &Element)> {
        self.elements.iter()
    }

    pub fn html(&self, id: ElementId) -> &str {
        self.element(id).map(|e| e.html.as_str()).unwrap_or("")
    }

    pub fn set_html(&mut self, id: ElementId, html: impl Into<String>) {
        self.element_mut(id).html = html.into();
    }

    pub fn value(&self, id: ElementId) -> &str {
        self.element(id).map(|e| e.value.as_str()).unwrap_or("")
    }

    pub fn set_value(&mut self, id: ElementId, value: impl Into<String>) {
        self.element_mut(id).value = value.into();
    }

    pub fn label(&self, id: ElementId) -> &str {
        self.element(id).map(|e| e.label.as_str()).unwrap_or("")
    }

    pub fn is_disabled(&self, id: ElementId) -> bool {
        self.element(id).map(|e| e.disabled).unwrap_or(false)
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.element(id).map(|e| e.hidden).unwrap_or(false)
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        self.element_mut(id).hidden = hidden;
    }

    pub fn scroll_into_view(&mut self, id: ElementId) {
        self.element_mut(id).scrolled_into_view = true;
    }

    /// Disables a trigger button and swaps in its busy label.
    pub fn set_busy(&mut self, id: ElementId) {
        let element = self.element_mut(id);
        element.disabled = true;
        element.label = id.busy_label().to_string();
    }

    /// Re-enables a trigger button with its idle label.
    pub fn restore_button(&mut self, id: ElementId) {
        let element = self.element_mut(id);
        element.disabled = false;
        element.label = id.default_label().to_string();
    }

    /// Blocking user-facing message.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.alerts.push(message.into());
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    /// Drains alerts raised since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}
