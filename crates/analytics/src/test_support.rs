use core_types::{ToolRecord, ToolStatus};
use rust_decimal::Decimal;

pub(crate) fn tool(id: i64, dept: &str, cost: Decimal, users: u32) -> ToolRecord {
    ToolRecord::new(id, format!("Tool {id}"), dept, cost, users)
}

/// A small but varied inventory: several vendors and categories, a
/// zero-user tool, and inactive records that must never be counted.
pub(crate) fn inventory() -> Vec<ToolRecord> {
    use rust_decimal_macros::dec;

    vec![
        ToolRecord::new(1, "GitHub Enterprise", "Engineering", dec!(210), 42)
            .with_vendor("GitHub")
            .with_category(1, "Development"),
        ToolRecord::new(2, "Jira", "Engineering", dec!(120), 30)
            .with_vendor("Atlassian")
            .with_category(2, "Project Management"),
        ToolRecord::new(3, "Confluence", "Marketing", dec!(60), 3)
            .with_vendor("Atlassian")
            .with_category(3, "Documentation"),
        ToolRecord::new(4, "Salesforce", "Sales", dec!(450), 5)
            .with_vendor("Salesforce")
            .with_category(4, "CRM"),
        ToolRecord::new(5, "Figma", "Design", dec!(45), 0)
            .with_vendor("Figma")
            .with_category(5, "Design"),
        ToolRecord::new(6, "Notion", "Operations", dec!(8), 2)
            .with_vendor("Notion Labs")
            .with_category(3, "Documentation"),
        ToolRecord::new(7, "Old CRM", "Sales", dec!(999), 1)
            .with_vendor("Legacy Corp")
            .with_category(4, "CRM")
            .with_status(ToolStatus::Deprecated),
        ToolRecord::new(8, "Linear", "Engineering", dec!(64), 4)
            .with_vendor("Linear")
            .with_category(2, "Project Management")
            .with_status(ToolStatus::Trial),
    ]
}
