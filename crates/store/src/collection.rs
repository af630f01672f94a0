/// The named JSON files under the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Categories,
    Icons,
    Profile,
    Articles,
    Photos,
    Messages,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Projects,
        Collection::Categories,
        Collection::Icons,
        Collection::Profile,
        Collection::Articles,
        Collection::Photos,
        Collection::Messages,
    ];

    /// File name relative to the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Projects => "projects.json",
            Self::Categories => "categories.json",
            Self::Icons => "icons.json",
            Self::Profile => "profile.json",
            Self::Articles => "articles.json",
            Self::Photos => "photos.json",
            Self::Messages => "messages.json",
        }
    }

    /// Singular entity label used in error messages.
    pub fn entity(self) -> &'static str {
        match self {
            Self::Projects => "Project",
            Self::Categories => "Category",
            Self::Icons => "Icon",
            Self::Profile => "Profile",
            Self::Articles => "Article",
            Self::Photos => "Photo",
            Self::Messages => "Message",
        }
    }
}
