use chrono::NaiveDate;
use crowdfund_core::{
    errors::LedgerError,
    project::{CrowdfundingProject, PaymentStatus, SALES_REVENUE_LABEL},
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

fn empty_project() -> CrowdfundingProject {
    CrowdfundingProject::new("Test Project", date(2024, 1, 1), date(2024, 12, 31))
}

#[test]
fn new_project_starts_empty() {
    let project = empty_project();

    assert_eq!(project.name, "Test Project");
    assert!(project.partners.is_empty());
    assert!(project.expenses.is_empty());
    assert!(project.payments.is_empty());
    assert!(project.sales.is_empty());
    assert_eq!(project.total_expenses(), Decimal::ZERO);
    assert_eq!(project.total_payments(), Decimal::ZERO);
    assert_eq!(project.total_investments(), Decimal::ZERO);
    assert_eq!(project.total_net_sales(None), Decimal::ZERO);
    assert_eq!(project.project_balance(), Decimal::ZERO);
    assert!(project.ownership_percentages().is_empty());
}

#[test]
fn totals_track_added_entities() {
    let mut project = empty_project();
    project.add_expense("Expense 1", dec!(1000), date(2024, 1, 1));
    project.add_expense("Expense 2", dec!(2500), date(2024, 2, 1));
    let partner = project.add_partner("Alice", dec!(30000));
    project.add_partner("Bob", dec!(20000));
    let expense = project.add_expense("Expense 3", dec!(1200), date(2024, 3, 20));
    project
        .add_payment(dec!(700), date(2024, 3, 21), Some(partner), Some(expense), false)
        .expect("payment accepted");
    project.add_sale(dec!(75000), date(2024, 6, 1), "Property Sale #1");

    assert_eq!(project.total_expenses(), dec!(4700));
    assert_eq!(project.total_payments(), dec!(700));
    assert_eq!(project.total_investments(), dec!(50000));
    assert_eq!(project.total_gross_sales(None), dec!(75000));
    assert_eq!(project.target_amount(), dec!(4700));
}

#[test]
fn ownership_percentages_split_by_investment() {
    let mut project = empty_project();
    project.add_partner("Alice", dec!(30000));
    project.add_partner("Bob", dec!(20000));

    let stakes = project.ownership_percentages();
    assert_eq!(stakes.len(), 2);
    assert_eq!(stakes[0].name, "Alice");
    assert_eq!(stakes[0].percentage, dec!(60));
    assert_eq!(stakes[1].name, "Bob");
    assert_eq!(stakes[1].percentage, dec!(40));
}

#[test]
fn ownership_percentages_are_zero_when_nothing_is_invested() {
    let mut project = empty_project();
    project.add_partner("Alice", Decimal::ZERO);
    project.add_partner("Bob", Decimal::ZERO);

    let stakes = project.ownership_percentages();
    assert_eq!(stakes.len(), 2);
    assert!(stakes.iter().all(|stake| stake.percentage.is_zero()));
}

#[test]
fn ownership_percentages_sum_to_one_hundred() {
    let mut project = empty_project();
    project.add_partner("Alice", dec!(1000000));
    project.add_partner("Bob", dec!(500000.40));
    project.add_partner("Carol", dec!(440690));

    let total: Decimal = project
        .ownership_percentages()
        .iter()
        .map(|stake| stake.percentage)
        .sum();
    assert!((total - dec!(100)).abs() < dec!(0.0000000001));
}

#[test]
fn partner_summary_reports_balances_and_net_sales_share() {
    let mut project = empty_project();
    let alice = project.add_partner("Alice", dec!(30000));
    project.add_partner("Bob", dec!(20000));
    let expense = project.add_expense("Foundation", dec!(10000), date(2024, 2, 1));
    project
        .add_payment(dec!(4000), date(2024, 2, 5), Some(alice), Some(expense), false)
        .expect("payment accepted");
    project.add_sale(dec!(20000), date(2024, 6, 1), "Unit Sale");
    project
        .add_payment(dec!(5000), date(2024, 6, 10), None, Some(expense), true)
        .expect("reinvestment accepted");

    let summary = project.partner_summary();
    assert_eq!(summary.len(), 2);

    let alice_row = &summary[0];
    assert_eq!(alice_row.name, "Alice");
    assert_eq!(alice_row.investment, dec!(30000));
    assert_eq!(alice_row.ownership_percentage, dec!(60));
    assert_eq!(alice_row.total_payments, dec!(4000));
    assert_eq!(alice_row.investment_balance, dec!(26000));
    // net sales = 20000 - 5000
    assert_eq!(alice_row.net_sales_share, dec!(9000));

    let bob_row = &summary[1];
    assert_eq!(bob_row.total_payments, Decimal::ZERO);
    assert_eq!(bob_row.net_sales_share, dec!(6000));
}

#[test]
fn expense_summary_tracks_partial_payment() {
    let mut project = empty_project();
    let partner = project.add_partner("Alice", dec!(50000));
    let expense = project.add_expense("Foundation", dec!(1000), date(2024, 1, 15));
    project
        .add_payment(dec!(500), date(2024, 1, 20), Some(partner), Some(expense), false)
        .expect("payment accepted");

    let summary = project.expense_summary();
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].total, dec!(1000));
    assert_eq!(summary[0].paid, dec!(500));
    assert_eq!(summary[0].remaining, dec!(500));
    assert_eq!(summary[0].status, PaymentStatus::PartiallyPaid);
}

#[test]
fn expense_without_payments_is_unpaid() {
    let mut project = empty_project();
    project.add_expense("Unpaid Expense", dec!(1500), date(2024, 1, 1));

    let summary = project.expense_summary();
    assert_eq!(summary[0].paid, Decimal::ZERO);
    assert_eq!(summary[0].remaining, dec!(1500));
    assert_eq!(summary[0].status, PaymentStatus::Unpaid);
}

#[test]
fn exact_fill_flips_status_and_one_cent_more_fails() {
    let mut project = empty_project();
    let partner = project.add_partner("Alice", dec!(50000));
    let expense = project.add_expense("Foundation", dec!(1000), date(2024, 1, 15));
    project
        .add_payment(dec!(500), date(2024, 1, 20), Some(partner), Some(expense), false)
        .expect("first payment accepted");
    project
        .add_payment(dec!(500), date(2024, 1, 25), Some(partner), Some(expense), false)
        .expect("exact fill accepted");

    let summary = project.expense_summary();
    assert_eq!(summary[0].status, PaymentStatus::FullyPaid);
    assert_eq!(summary[0].remaining, Decimal::ZERO);

    let rejected = project.add_payment(
        dec!(0.01),
        date(2024, 1, 26),
        Some(partner),
        Some(expense),
        false,
    );
    match rejected {
        Err(LedgerError::OverPayment {
            description,
            total,
            paid,
            remaining,
            attempted,
        }) => {
            assert_eq!(description, "Foundation");
            assert_eq!(total, dec!(1000));
            assert_eq!(paid, dec!(1000));
            assert_eq!(remaining, Decimal::ZERO);
            assert_eq!(attempted, dec!(0.01));
        }
        other => panic!("expected over-payment rejection, got {other:?}"),
    }
    assert_eq!(project.payment_count(), 2);
}

#[test]
fn zero_amount_expense_reports_fully_paid() {
    let mut project = empty_project();
    project.add_expense("Waived Fee", Decimal::ZERO, date(2024, 1, 1));

    let summary = project.expense_summary();
    assert_eq!(summary[0].status, PaymentStatus::FullyPaid);
}

#[test]
fn payment_requires_exactly_one_funding_source() {
    let mut project = empty_project();
    let partner = project.add_partner("Alice", dec!(10000));

    let both = project.add_payment(dec!(100), date(2024, 2, 1), Some(partner), None, true);
    assert!(matches!(both, Err(LedgerError::ConflictingSource)));

    let neither = project.add_payment(dec!(100), date(2024, 2, 1), None, None, false);
    assert!(matches!(neither, Err(LedgerError::MissingSource)));

    assert_eq!(project.payment_count(), 0);
}

#[test]
fn payment_amount_must_be_positive() {
    let mut project = empty_project();
    let partner = project.add_partner("Alice", dec!(10000));

    let zero = project.add_payment(Decimal::ZERO, date(2024, 2, 1), Some(partner), None, false);
    assert!(matches!(zero, Err(LedgerError::NonPositiveAmount { .. })));

    let negative = project.add_payment(dec!(-5), date(2024, 2, 1), Some(partner), None, false);
    assert!(matches!(negative, Err(LedgerError::NonPositiveAmount { .. })));
}

#[test]
fn payment_with_dangling_references_is_rejected() {
    let mut project = empty_project();
    let partner = project.add_partner("Alice", dec!(10000));

    let unknown_partner =
        project.add_payment(dec!(100), date(2024, 2, 1), Some(Uuid::new_v4()), None, false);
    assert!(matches!(
        unknown_partner,
        Err(LedgerError::UnknownPartner(_))
    ));

    let unknown_expense = project.add_payment(
        dec!(100),
        date(2024, 2, 1),
        Some(partner),
        Some(Uuid::new_v4()),
        false,
    );
    assert!(matches!(
        unknown_expense,
        Err(LedgerError::UnknownExpense(_))
    ));
    assert_eq!(project.payment_count(), 0);
}

#[test]
fn net_sales_can_go_negative() {
    let mut project = empty_project();
    let expense = project.add_expense("Finishing", dec!(30000), date(2024, 5, 1));
    project.add_sale(dec!(10000), date(2024, 6, 1), "Deposit");
    project
        .add_payment(dec!(10000), date(2024, 6, 5), None, Some(expense), true)
        .expect("first reinvestment accepted");
    project
        .add_payment(dec!(5000), date(2024, 6, 6), None, Some(expense), true)
        .expect("second reinvestment accepted");

    assert_eq!(project.total_net_sales(None), dec!(-5000));
}

#[test]
fn sales_totals_respect_since_filter() {
    let mut project = empty_project();
    let expense = project.add_expense("Finishing", dec!(100000), date(2024, 1, 1));
    project.add_sale(dec!(15000), date(2024, 3, 1), "Property A");
    project.add_sale(dec!(25000), date(2024, 4, 1), "Property B");
    project
        .add_payment(dec!(5000), date(2024, 3, 10), None, Some(expense), true)
        .expect("reinvestment accepted");
    project
        .add_payment(dec!(2000), date(2024, 4, 10), None, Some(expense), true)
        .expect("reinvestment accepted");

    assert_eq!(project.total_gross_sales(None), dec!(40000));
    assert_eq!(
        project.total_gross_sales(Some(date(2024, 4, 1))),
        dec!(25000)
    );
    assert_eq!(
        project.total_sales_reinvestments(Some(date(2024, 4, 1))),
        dec!(2000)
    );
    assert_eq!(project.total_net_sales(Some(date(2024, 4, 1))), dec!(23000));
}

#[test]
fn project_balance_subtracts_partner_funded_payments_from_net_sales() {
    let mut project = empty_project();
    let partner = project.add_partner("Alice", dec!(50000));
    let expense = project.add_expense("Foundation", dec!(40000), date(2024, 1, 10));
    project
        .add_payment(dec!(12000), date(2024, 1, 15), Some(partner), Some(expense), false)
        .expect("payment accepted");
    project.add_sale(dec!(30000), date(2024, 6, 1), "Unit Sale");
    project
        .add_payment(dec!(8000), date(2024, 6, 10), None, Some(expense), true)
        .expect("reinvestment accepted");

    // net sales 22000, partner-funded payments 12000
    assert_eq!(project.project_balance(), dec!(10000));
}

#[test]
fn payment_summary_preserves_insertion_order_and_labels() {
    let mut project = empty_project();
    let partner = project.add_partner("Test Partner", dec!(10000));
    let expense = project.add_expense("Test Expense", dec!(2000), date(2024, 1, 1));
    project.add_sale(dec!(5000), date(2024, 1, 2), "Unit Sale");
    project
        .add_payment(dec!(800), date(2024, 1, 5), Some(partner), Some(expense), false)
        .expect("payment accepted");
    project
        .add_payment(dec!(1200), date(2024, 1, 10), None, Some(expense), true)
        .expect("reinvestment accepted");
    project
        .add_payment(dec!(300), date(2024, 1, 12), Some(partner), None, false)
        .expect("unlinked payment accepted");

    let summary = project.payment_summary();
    assert_eq!(summary.len(), 3);

    assert_eq!(summary[0].source_label, "Test Partner");
    assert_eq!(summary[0].amount, dec!(800));
    assert_eq!(summary[0].expense_description.as_deref(), Some("Test Expense"));
    assert_eq!(summary[0].percentage_of_expense, dec!(40));
    assert!(!summary[0].from_sales);

    assert_eq!(summary[1].source_label, SALES_REVENUE_LABEL);
    assert!(summary[1].from_sales);
    assert_eq!(summary[1].percentage_of_expense, dec!(60));

    assert_eq!(summary[2].expense_description, None);
    assert_eq!(summary[2].percentage_of_expense, Decimal::ZERO);
}

#[test]
fn sale_summary_lists_each_sale() {
    let mut project = empty_project();
    project.add_sale(dec!(15000), date(2024, 3, 1), "Property A");
    project.add_sale(dec!(25000), date(2024, 4, 1), "Property B");

    let summary = project.sale_summary();
    assert_eq!(summary.len(), 2);
    assert_eq!(summary[0].description, "Property A");
    assert_eq!(summary[0].total, dec!(15000));
    assert_eq!(summary[0].date, date(2024, 3, 1));
    assert_eq!(summary[1].description, "Property B");
}

#[test]
fn summaries_are_idempotent() {
    let mut project = empty_project();
    let partner = project.add_partner("Alice", dec!(30000));
    let expense = project.add_expense("Foundation", dec!(10000), date(2024, 2, 1));
    project
        .add_payment(dec!(4000), date(2024, 2, 5), Some(partner), Some(expense), false)
        .expect("payment accepted");
    project.add_sale(dec!(20000), date(2024, 6, 1), "Unit Sale");

    assert_eq!(project.partner_summary(), project.partner_summary());
    assert_eq!(project.expense_summary(), project.expense_summary());
    assert_eq!(project.payment_summary(), project.payment_summary());
    assert_eq!(project.sale_summary(), project.sale_summary());
    assert_eq!(project.overview(), project.overview());
}

#[test]
fn overview_collects_headline_figures() {
    let mut project = empty_project();
    let partner = project.add_partner("Alice", dec!(50000));
    let expense = project.add_expense("Foundation", dec!(40000), date(2024, 1, 10));
    project
        .add_payment(dec!(12000), date(2024, 1, 15), Some(partner), Some(expense), false)
        .expect("payment accepted");
    project.add_sale(dec!(30000), date(2024, 6, 1), "Unit Sale");
    project
        .add_payment(dec!(8000), date(2024, 6, 10), None, Some(expense), true)
        .expect("reinvestment accepted");

    let overview = project.overview();
    assert_eq!(overview.target_amount, dec!(40000));
    assert_eq!(overview.total_investments, dec!(50000));
    assert_eq!(overview.total_payments, dec!(20000));
    assert_eq!(overview.gross_sales, dec!(30000));
    assert_eq!(overview.sales_reinvestments, dec!(8000));
    assert_eq!(overview.net_sales, dec!(22000));
    assert_eq!(overview.project_balance, dec!(10000));
    assert_eq!(overview.remaining_expenses, dec!(20000));
}
