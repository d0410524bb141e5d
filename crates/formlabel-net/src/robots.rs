//! robots.txt parsing
//!
//! Only `User-agent` grouping and `Disallow` prefixes are honored.

/// One `User-agent` group
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Group {
    /// Lower-cased agent tokens
    agents: Vec<String>,
    disallow: Vec<String>,
}

impl Group {
    fn applies_to(&self, agent: &str) -> bool {
        let agent = agent.to_ascii_lowercase();
        // A group names us when its token carries our full product token
        self.agents
            .iter()
            .any(|a| a == "*" || (!agent.is_empty() && a.starts_with(agent.as_str())))
    }
}

/// Parsed robots.txt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsTxt {
    groups: Vec<Group>,
}

impl RobotsTxt {
    /// Parse a robots.txt body. Unknown directives and junk lines are ignored.
    pub fn parse(body: &str) -> Self {
        let mut groups: Vec<Group> = Vec::new();
        // Consecutive User-agent lines share one group
        let mut in_agent_run = false;

        for raw in body.lines() {
            let line = raw.split('#').next().unwrap_or("").trim();
            let Some((field, value)) = line.split_once(':') else {
                continue;
            };
            let field = field.trim().to_ascii_lowercase();
            let value = value.trim();

            match field.as_str() {
                "user-agent" => {
                    if !in_agent_run || groups.is_empty() {
                        groups.push(Group::default());
                    }
                    if let Some(group) = groups.last_mut() {
                        if !value.is_empty() {
                            group.agents.push(value.to_ascii_lowercase());
                        }
                    }
                    in_agent_run = true;
                }
                "disallow" => {
                    in_agent_run = false;
                    if let Some(group) = groups.last_mut() {
                        if !value.is_empty() {
                            group.disallow.push(value.to_string());
                        }
                    }
                }
                _ => in_agent_run = false,
            }
        }

        Self { groups }
    }

    /// Whether `agent` may fetch `path`
    pub fn is_allowed(&self, path: &str, agent: &str) -> bool {
        !self
            .groups
            .iter()
            .filter(|g| g.applies_to(agent))
            .flat_map(|g| g.disallow.iter())
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}
