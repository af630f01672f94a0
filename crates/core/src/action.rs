//! The closed set of API actions.
//!
//! Every action has a wire name (the `action` query value) and a list of
//! parameters that must be present before its handler runs. Unknown or
//! missing names resolve to [`Action::Overview`].

use crate::error::CoreError;

macro_rules! define_actions {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal requires [$($param:literal),*] ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every registered action, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The wire name used in the `action` query parameter.
            pub fn name(self) -> &'static str {
                match self {
                    $( $name::$variant => $wire ),+
                }
            }

            /// Parameters that must be present and non-empty.
            pub fn required_params(self) -> &'static [&'static str] {
                match self {
                    $( $name::$variant => &[$($param),*] ),+
                }
            }

            /// Look up an action by wire name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }
        }
    };
}

define_actions! {
    /// API actions selectable through `?action=`.
    Action {
        /// Projects, categories and icons in one payload.
        Overview = "overview" requires [],
        GetProjects = "get_projects" requires [],
        GetProjectDetails = "get_project_details" requires ["id"],
        AddProject = "add_project" requires [],
        UpdateProject = "update_project" requires ["id"],
        DeleteProject = "delete_project" requires ["id"],
        GetCategories = "get_categories" requires [],
        GetIcons = "get_icons" requires [],
        GetConfig = "get_config" requires [],
        UpdateConfig = "update_config" requires [],
        GetUsers = "get_users" requires [],
        GetUser = "get_user" requires ["id"],
        AddUser = "add_user" requires [],
        UpdateUser = "update_user" requires ["id"],
        DeleteUser = "delete_user" requires ["id"],
        GetSiteInfo = "get_site_info" requires [],
        GetArticles = "get_articles" requires [],
        GetArticle = "get_article" requires ["id"],
        GetPhotos = "get_photos" requires [],
        GetPhoto = "get_photo" requires ["id"],
        GetMessages = "get_messages" requires [],
        GetMessage = "get_message" requires ["id"],
        MarkMessageRead = "mark_message_read" requires ["id"],
        DeleteMessage = "delete_message" requires ["id"],
    }
}

impl Action {
    /// Resolve the `action` parameter. Absent, empty or unknown names fall
    /// back to [`Action::Overview`].
    pub fn resolve(name: Option<&str>) -> Self {
        name.and_then(Self::from_name).unwrap_or(Self::Overview)
    }

    /// Check that every required parameter is present and non-blank.
    pub fn validate(self, params: &[(String, String)]) -> Result<(), CoreError> {
        for required in self.required_params() {
            let present = params
                .iter()
                .any(|(k, v)| k == required && !v.trim().is_empty());
            if !present {
                return Err(CoreError::Validation(format!(
                    "{required} is required for {}",
                    self.name()
                )));
            }
        }
        Ok(())
    }

    /// Whether the action rewrites a file on disk.
    pub fn is_mutation(self) -> bool {
        matches!(
            self,
            Self::AddProject
                | Self::UpdateProject
                | Self::DeleteProject
                | Self::UpdateConfig
                | Self::MarkMessageRead
                | Self::DeleteMessage
        )
    }
}
