// src/schema/builtin.rs

use super::types::{ColumnSpec, ConstantColumn, LenderSchema, DEFAULT_KEY_HEADER};

pub const BLC_SCHEMA: &str = "business_line_of_credit";
pub const MCA_SCHEMA: &str = "mca";

/// Partner relationship stamped on every imported lender.
pub const RELATIONSHIP: &str = "IFS";
pub const STATUS: &str = "active";

fn trailing_constants() -> Vec<ConstantColumn> {
    vec![
        ConstantColumn::new("relationship", RELATIONSHIP),
        ConstantColumn::new("status", STATUS),
    ]
}

impl LenderSchema {
    /// `lenders_business_line_of_credit`: 26 mapped columns + relationship + status.
    pub fn business_line_of_credit() -> Self {
        let columns = vec![
            ColumnSpec::text("Lender Name", "lender_name"),
            ColumnSpec::text("Bank / Non-Bank", "bank_non_bank"),
            ColumnSpec::text("Website", "website"),
            ColumnSpec::text("Iso Contacts", "iso_contacts"),
            ColumnSpec::text("Phone", "phone"),
            ColumnSpec::text("Email", "email"),
            ColumnSpec::numeric("Credit Requirement", "credit_requirement"),
            ColumnSpec::text("Credit Used", "credit_used"),
            ColumnSpec::text("Minimum Time In Business", "min_time_in_business"),
            ColumnSpec::numeric("Minimum Deposit Count", "minimum_deposit_count"),
            ColumnSpec::text("Minimum Monthly Revenue Amount", "min_monthly_revenue_amount"),
            ColumnSpec::text("Minimum Average Daily Balance", "min_avg_daily_balance"),
            ColumnSpec::text("Max Loan", "max_loan"),
            ColumnSpec::text("Positions", "positions"),
            ColumnSpec::text("Products Offered", "products_offered"),
            ColumnSpec::text("Terms", "terms"),
            ColumnSpec::text("Payments", "payments"),
            ColumnSpec::text("Draw Fees", "draw_fees"),
            ColumnSpec::text("Preferred Industries", "preferred_industries"),
            ColumnSpec::text("Restricted Industries", "restricted_industries"),
            // the sheet header carries a trailing space
            ColumnSpec::text("Ineligible States ", "ineligible_states"),
            ColumnSpec::text("Submission Docs", "submission_docs"),
            ColumnSpec::text("Submission Type", "submission_type"),
            ColumnSpec::text("Submission Process", "submission_process"),
            ColumnSpec::text("Drive Link", "drive_link"),
            ColumnSpec::text("Notes", "notes"),
        ];

        Self {
            name: BLC_SCHEMA.to_owned(),
            label: "Business Line of Credit".to_owned(),
            tag: "BLC".to_owned(),
            table: "lenders_business_line_of_credit".to_owned(),
            key_header: DEFAULT_KEY_HEADER.to_owned(),
            columns,
            constants: trailing_constants(),
            csv_path: None,
        }
    }

    /// `lenders_mca`: 25 mapped columns + relationship + status.
    pub fn mca() -> Self {
        let columns = vec![
            ColumnSpec::text("Lender Name", "lender_name"),
            ColumnSpec::text("Paper", "paper"),
            ColumnSpec::text("Website", "website"),
            ColumnSpec::text("ISO REP", "iso_rep"),
            ColumnSpec::text("Phone", "phone"),
            ColumnSpec::text("Email", "email"),
            ColumnSpec::text("Submission Docs", "submission_docs"),
            ColumnSpec::text("Submission Type", "submission_type"),
            ColumnSpec::text("Submission Process", "submission_process"),
            ColumnSpec::numeric("Minimum Credit Requirement", "minimum_credit_requirement"),
            ColumnSpec::text("Minimum Monthly Revenue", "minimum_monthly_revenue"),
            ColumnSpec::text("Max NSF / Negative Days", "max_nsf_negative_days"),
            ColumnSpec::text("Minimum Daily Balances", "minimum_daily_balances"),
            ColumnSpec::text("Minimum Time In Business", "minimum_time_in_business"),
            ColumnSpec::text("Minimum Loan Amount", "minimum_loan_amount"),
            ColumnSpec::text("Max Loan Amount", "max_loan_amount"),
            ColumnSpec::text("Terms", "terms"),
            ColumnSpec::text("Positions", "positions"),
            ColumnSpec::text("Buyouts", "buyouts"),
            ColumnSpec::text("Products Offered", "products_offered"),
            ColumnSpec::text("States Restrictions", "states_restrictions"),
            ColumnSpec::text("Google Drive", "google_drive"),
            ColumnSpec::text("Note", "note"),
            ColumnSpec::text("Preferred Industries", "preferred_industries"),
            ColumnSpec::text("Restricted Industries", "restricted_industries"),
        ];

        Self {
            name: MCA_SCHEMA.to_owned(),
            label: "MCA".to_owned(),
            tag: "MCA".to_owned(),
            table: "lenders_mca".to_owned(),
            key_header: DEFAULT_KEY_HEADER.to_owned(),
            columns,
            constants: trailing_constants(),
            csv_path: None,
        }
    }
}
