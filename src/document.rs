//! In-memory model of a static screen.
//!
//! A [`Document`] is an ordered list of [`Element`]s plus a title and a
//! document-level locale marker. Elements are addressed by [`NodeId`], their
//! position in the document, which stays stable for the lifetime of a page.

use crate::definitions::Page;
use crate::i18n::{Locale, LocalizedText};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading,
    Paragraph,
    Link,
    PrimaryButton,
    SocialButton,
    InputField { secret: bool },
    /// One cell of the one-time code, `index` runs from 1.
    CodeCell { index: u8 },
    Timer,
    LanguageToggle,
    LocaleIndicator(Locale),
    Divider,
}

impl ElementKind {
    pub fn is_focusable(self) -> bool {
        matches!(
            self,
            Self::Link
                | Self::PrimaryButton
                | Self::SocialButton
                | Self::InputField { .. }
                | Self::CodeCell { .. }
                | Self::LanguageToggle
        )
    }

    pub fn accepts_text(self) -> bool {
        matches!(self, Self::InputField { .. } | Self::CodeCell { .. })
    }

    pub fn is_clickable(self) -> bool {
        matches!(
            self,
            Self::Link | Self::PrimaryButton | Self::SocialButton | Self::LanguageToggle
        )
    }
}

/// Color role of a locale indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Accent,
    Neutral,
}

/// Transient press animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Ripple,
    Pressed,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: Option<&'static str>,
    pub kind: ElementKind,
    pub label: Option<LocalizedText>,
    pub placeholder: Option<LocalizedText>,
    pub text: String,
    pub value: String,
    pub autofocus: bool,
    pub active: bool,
    pub hidden: bool,
    pub en_active: bool,
    pub tone: Option<Tone>,
    pub effect: Option<Effect>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            id: None,
            kind,
            label: None,
            placeholder: None,
            text: String::new(),
            value: String::new(),
            autofocus: false,
            active: false,
            hidden: false,
            en_active: false,
            tone: None,
            effect: None,
        }
    }

    pub fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    /// Attaches a dual-locale label. Markup is authored in Japanese, so the
    /// visible text starts out as the Japanese label.
    pub fn with_label(mut self, ja: &str, en: &str) -> Self {
        self.text = ja.to_string();
        self.label = Some(LocalizedText::new(ja, en));
        self
    }

    pub fn with_placeholder(mut self, ja: &str, en: &str) -> Self {
        self.placeholder = Some(LocalizedText::new(ja, en));
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn with_tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    pub fn autofocus(mut self) -> Self {
        self.autofocus = true;
        self
    }

    pub fn code_index(&self) -> Option<u8> {
        match self.kind {
            ElementKind::CodeCell { index } => Some(index),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    page: Page,
    pub title: String,
    pub lang: Locale,
    elements: Vec<Element>,
}

impl Document {
    pub fn new(page: Page, title: impl Into<String>) -> Self {
        Self {
            page,
            title: title.into(),
            lang: Locale::Ja,
            elements: Vec::new(),
        }
    }

    pub fn push(&mut self, element: Element) -> NodeId {
        self.elements.push(element);
        NodeId(self.elements.len() - 1)
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.elements.get(node.0)
    }

    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .map(|(idx, element)| (NodeId(idx), element))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (NodeId, &mut Element)> {
        self.elements
            .iter_mut()
            .enumerate()
            .map(|(idx, element)| (NodeId(idx), element))
    }

    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.iter()
            .find(|(_, element)| element.id == Some(id))
            .map(|(node, _)| node)
    }

    /// Nodes matching `predicate`, in document order.
    pub fn select(&self, predicate: impl Fn(&Element) -> bool) -> Vec<NodeId> {
        self.iter()
            .filter(|(_, element)| predicate(element))
            .map(|(node, _)| node)
            .collect()
    }

    pub fn code_cell(&self, index: u8) -> Option<NodeId> {
        self.iter()
            .find(|(_, element)| element.code_index() == Some(index))
            .map(|(node, _)| node)
    }

    pub fn locale_indicator(&self, locale: Locale) -> Option<NodeId> {
        self.iter()
            .find(|(_, element)| element.kind == ElementKind::LocaleIndicator(locale))
            .map(|(node, _)| node)
    }

    /// Visible nodes that can take keyboard focus.
    pub fn focusable(&self) -> Vec<NodeId> {
        self.select(|element| element.kind.is_focusable() && !element.hidden)
    }
}
