use serde::Serialize;

/// Functional group a role string belongs to. Decides which tabs are offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleCategory {
    ComplaintAdmin,
    Supervisor,
    ServiceProvider,
    ServiceAuthority,
    Caretaker,
    Resident,
}

/// How a category is recognised inside a role string.
struct RoleRule {
    category: RoleCategory,
    names: &'static [&'static str],
    markers: &'static [&'static str],
}

/// Checked top to bottom; the first rule that matches wins.
const RULES: [RoleRule; 5] = [
    RoleRule {
        category: RoleCategory::ComplaintAdmin,
        names: &["complaint_admin"],
        markers: &[],
    },
    RoleRule {
        category: RoleCategory::Supervisor,
        names: &["supervisor"],
        markers: &[],
    },
    RoleRule {
        category: RoleCategory::ServiceProvider,
        names: &["service_provider"],
        markers: &["SP"],
    },
    RoleRule {
        category: RoleCategory::ServiceAuthority,
        names: &["service_authority"],
        markers: &["SA"],
    },
    RoleRule {
        category: RoleCategory::Caretaker,
        names: &["caretaker", "convener"],
        markers: &[],
    },
];

impl RoleCategory {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::ComplaintAdmin,
            Self::Supervisor,
            Self::ServiceProvider,
            Self::ServiceAuthority,
            Self::Caretaker,
            Self::Resident,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ComplaintAdmin => "Complaint Admin",
            Self::Supervisor => "Supervisor",
            Self::ServiceProvider => "Service Provider",
            Self::ServiceAuthority => "Service Authority",
            Self::Caretaker => "Caretaker / Convener",
            Self::Resident => "Resident",
        }
    }

    /// Classifies a raw role string such as `supervisor_trainee`, `hall3_SP`
    /// or `convener`.
    ///
    /// The role is split into tokens on `_`, `-` and whitespace. Role names
    /// match a run of whole tokens case-insensitively; short markers (`SP`,
    /// `SA`) must appear as an uppercase token of their own. Anything
    /// unmatched is a resident.
    pub fn classify(role: &str) -> Self {
        let tokens: Vec<&str> = role
            .split(|c: char| c == '_' || c == '-' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .collect();

        RULES
            .iter()
            .find(|rule| {
                rule.names
                    .iter()
                    .any(|name| contains_name(&tokens, name))
                    || rule
                        .markers
                        .iter()
                        .any(|marker| tokens.iter().any(|token| token == marker))
            })
            .map(|rule| rule.category)
            .unwrap_or(Self::Resident)
    }
}

fn contains_name(tokens: &[&str], name: &str) -> bool {
    let parts: Vec<&str> = name.split('_').collect();
    tokens.windows(parts.len()).any(|window| {
        window
            .iter()
            .zip(&parts)
            .all(|(token, part)| token.eq_ignore_ascii_case(part))
    })
}
