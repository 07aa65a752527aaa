/// A message to post: optional title plus body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub title: Option<String>,
    pub body: String,
}

impl Message {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            title: None,
            body: body.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Renders the HTML content sent to Teams.
    ///
    /// An empty title is treated as no title. Neither part is escaped.
    pub fn to_html(&self) -> String {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => format!("<b>{title}</b><br/><br/>{}", self.body),
            _ => self.body.clone(),
        }
    }
}
