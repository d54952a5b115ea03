use crate::book::RecipeBook;
use crate::catalog::ItemCatalog;
use crate::config::CraftzConfig;
use crate::model::Shelf;

pub mod add;
pub mod config;
pub mod delete;
pub mod generate;
pub mod init;
pub mod items;
pub mod list;
pub mod load;
pub mod save;
pub mod view;

/// Everything one interactive session owns: the live book, the cached
/// item catalog, and the path configuration. Commands receive this
/// explicitly; there is no ambient shared state.
#[derive(Debug, Default)]
pub struct Session {
    pub book: RecipeBook,
    pub catalog: Option<ItemCatalog>,
    pub config: CraftzConfig,
}

impl Session {
    pub fn new(config: CraftzConfig) -> Self {
        Self {
            book: RecipeBook::new(),
            catalog: None,
            config,
        }
    }
}

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One book entry prepared for display. The index is the entry's 1-based
/// position in the unfiltered canonical order, so it stays valid as a
/// deletion handle even when a search reorders or narrows the listing.
#[derive(Debug, Clone)]
pub struct ListedRecipe {
    pub index: usize,
    pub shelf: Shelf,
    pub label: String,
    pub raw: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub rendered: Option<String>,
    pub listed: Vec<ListedRecipe>,
    pub items: Vec<String>,
    pub config: Option<CraftzConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_rendered(mut self, text: String) -> Self {
        self.rendered = Some(text);
        self
    }

    pub fn with_listed(mut self, listed: Vec<ListedRecipe>) -> Self {
        self.listed = listed;
        self
    }

    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }

    pub fn with_config(mut self, config: CraftzConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }
}
