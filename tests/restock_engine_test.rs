// ==========================================
// RestockEngine 集成测试
// ==========================================
// 测试目标: 窗口切分、增长平滑、取整、库存缺口
// ==========================================

mod test_helpers;

use bchain_restock::config::{ItemCatalog, RestockParams};
use bchain_restock::domain::{ConsumptionRecord, ConsumptionTable, InventoryTable, WindowCoverage};
use bchain_restock::engine::{EngineError, RestockEngine};
use bchain_restock::logging;
use test_helpers::*;

fn evaluate(
    consumption: &ConsumptionTable,
    inventory: &InventoryTable,
    catalog: &ItemCatalog,
) -> bchain_restock::RestockReport {
    RestockEngine::new()
        .evaluate(consumption, inventory, catalog, &RestockParams::default())
        .expect("evaluate should succeed")
}

// ==========================================
// 端到端计算
// ==========================================

#[test]
fn test_single_item_end_to_end() {
    logging::init_test();

    // week1 = 100, week2 = 150 → 增长 50%，系数 1.5
    let consumption = daily_table("A消耗", &two_window_values(100.0, 150.0));
    let stock = inventory(&[("A", 100.0, 50.0)]);
    let report = evaluate(&consumption, &stock, &single_item_catalog());

    assert_eq!(report.total_lead_days, 35);
    assert_eq!(report.window.coverage, WindowCoverage::Full);

    let row = report.row("A").unwrap();
    assert_eq!(row.week1_total, 100.0);
    assert_eq!(row.week2_total, 150.0);
    assert_eq!(row.growth_rate_pct, 50.0);
    assert!(!row.zero_baseline);
    assert!((row.daily_average - 150.0 / 14.0).abs() < 1e-12);
    assert_eq!(row.growth_multiplier, 1.5);
    assert!(!row.growth_dampened);
    // 10.714285… × 35 × 1.5 = 562.5 → 562（五成双）
    assert_eq!(row.restock_qty, 562);
    assert_eq!(row.stock_on_hand_total, 150.0);
    assert!(row.needs_restock);
    assert_eq!(row.suggested_reorder_qty, 412);
}

#[test]
fn test_output_order_follows_catalog() {
    let consumption = multi_column_table(&[
        ("B消耗", &two_window_values(10.0, 10.0)),
        ("A消耗", &two_window_values(10.0, 10.0)),
    ]);
    let report = evaluate(&consumption, &InventoryTable::default(), &two_item_catalog());

    let ids: Vec<&str> = report.rows.iter().map(|r| r.item_id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B"]);
}

// ==========================================
// 增长平滑
// ==========================================

#[test]
fn test_dampening_threshold_is_strict() {
    // A: 10 → 19，系数正好 1.9，不平滑
    // B: 10 → 30，系数 3.0，改用整体系数 1 + (90 + 200) / 2 / 100 = 2.45
    let consumption = multi_column_table(&[
        ("A消耗", &two_window_values(10.0, 19.0)),
        ("B消耗", &two_window_values(10.0, 30.0)),
    ]);
    let report = evaluate(&consumption, &InventoryTable::default(), &two_item_catalog());

    assert!((report.overall_growth_multiplier - 2.45).abs() < 1e-12);

    let a = report.row("A").unwrap();
    assert_eq!(a.raw_growth_multiplier, 1.9);
    assert_eq!(a.growth_multiplier, 1.9);
    assert!(!a.growth_dampened);
    assert_eq!(a.restock_qty, 90); // 19/14 × 35 × 1.9 = 90.25

    let b = report.row("B").unwrap();
    assert_eq!(b.raw_growth_multiplier, 3.0);
    assert!(b.growth_dampened);
    assert!((b.growth_multiplier - 2.45).abs() < 1e-12);
    assert_eq!(b.restock_qty, 184); // 30/14 × 35 × 2.45 = 183.75
}

#[test]
fn test_zero_baseline_uses_unit_divisor() {
    let consumption = daily_table("A消耗", &two_window_values(0.0, 14.0));
    let report = evaluate(&consumption, &InventoryTable::default(), &single_item_catalog());

    let row = report.row("A").unwrap();
    assert!(row.zero_baseline);
    assert_eq!(row.growth_rate_pct, 1400.0);
    assert_eq!(row.raw_growth_multiplier, 15.0);
    // 单物品时整体系数与自身相同
    assert!(row.growth_dampened);
    assert_eq!(row.growth_multiplier, 15.0);
    assert_eq!(row.restock_qty, 525);
}

#[test]
fn test_zero_baseline_with_zero_usage() {
    let consumption = daily_table("A消耗", &[0.0; 28]);
    let report = evaluate(&consumption, &InventoryTable::default(), &single_item_catalog());

    let row = report.row("A").unwrap();
    assert!(row.zero_baseline);
    assert_eq!(row.growth_rate_pct, 0.0);
    assert_eq!(row.restock_qty, 0);
    assert!(!row.needs_restock);
    assert_eq!(row.suggested_reorder_qty, 0);
}

// ==========================================
// 库存
// ==========================================

#[test]
fn test_missing_inventory_counts_as_zero() {
    let consumption = daily_table("A消耗", &two_window_values(100.0, 150.0));
    let stock = inventory(&[("其他", 999.0, 999.0)]);
    let report = evaluate(&consumption, &stock, &single_item_catalog());

    let row = report.row("A").unwrap();
    assert_eq!(row.stock_on_hand_total, 0.0);
    assert!(row.needs_restock);
    assert_eq!(row.suggested_reorder_qty, row.restock_qty);
}

#[test]
fn test_first_inventory_row_wins() {
    let consumption = daily_table("A消耗", &two_window_values(100.0, 150.0));
    let stock = inventory(&[("A", 600.0, 0.0), ("A", 0.0, 0.0)]);
    let report = evaluate(&consumption, &stock, &single_item_catalog());

    let row = report.row("A").unwrap();
    assert_eq!(row.stock_on_hand_total, 600.0);
    assert!(!row.needs_restock);
    assert_eq!(row.suggested_reorder_qty, 0);
}

#[test]
fn test_suggestion_is_never_negative() {
    let consumption = daily_table("A消耗", &two_window_values(100.0, 150.0));
    for stock_total in [0.0, 1.0, 412.0, 561.5, 562.0, 563.0, 10_000.0] {
        let stock = inventory(&[("A", stock_total, 0.0)]);
        let row = evaluate(&consumption, &stock, &single_item_catalog()).rows.remove(0);

        assert!(row.suggested_reorder_qty >= 0);
        assert_eq!(row.needs_restock, row.restock_qty as f64 > row.stock_on_hand_total);
        if !row.needs_restock {
            assert_eq!(row.suggested_reorder_qty, 0);
        }
    }
}

// ==========================================
// 窗口
// ==========================================

#[test]
fn test_history_before_window_is_ignored() {
    let recent: Vec<f64> = (0..28).map(|i| (i % 5) as f64 + 3.0).collect();
    let mut long = vec![1000.0; 12];
    long.extend_from_slice(&recent);

    let short_report = evaluate(
        &daily_table("A消耗", &recent),
        &InventoryTable::default(),
        &single_item_catalog(),
    );
    let long_report = evaluate(
        &daily_table("A消耗", &long),
        &InventoryTable::default(),
        &single_item_catalog(),
    );

    let (s, l) = (&short_report.rows[0], &long_report.rows[0]);
    assert_eq!(s.week1_total, l.week1_total);
    assert_eq!(s.week2_total, l.week2_total);
    assert_eq!(s.restock_qty, l.restock_qty);
    assert_eq!(long_report.window.start, day(12));
    assert_eq!(long_report.window.split, day(26));
    assert_eq!(long_report.window.end, day(39));
}

#[test]
fn test_input_order_does_not_matter() {
    let values = two_window_values(100.0, 150.0);
    let sorted = daily_table("A消耗", &values);
    let mut reversed_records = sorted.records.clone();
    reversed_records.reverse();
    let reversed = ConsumptionTable::new(sorted.columns.clone(), reversed_records);

    let a = evaluate(&sorted, &InventoryTable::default(), &single_item_catalog());
    let b = evaluate(&reversed, &InventoryTable::default(), &single_item_catalog());

    assert_eq!(a.rows, b.rows);
    assert_eq!(a.window, b.window);
}

#[test]
fn test_repeated_runs_are_deterministic() {
    let consumption = daily_table("A消耗", &two_window_values(37.0, 81.0));
    let stock = inventory(&[("A", 12.0, 5.0)]);
    let first = evaluate(&consumption, &stock, &single_item_catalog());
    let second = evaluate(&consumption, &stock, &single_item_catalog());

    assert_eq!(first.rows, second.rows);
    assert_ne!(first.run_id, second.run_id);
}

#[test]
fn test_short_history_shrinks_windows() {
    let values: Vec<f64> = vec![2.0; 20];
    let report = evaluate(
        &daily_table("A消耗", &values),
        &InventoryTable::default(),
        &single_item_catalog(),
    );

    assert_eq!(report.window.coverage, WindowCoverage::Partial);
    assert_eq!(report.window.week1_days, 14);
    assert_eq!(report.window.week2_days, 6);
    assert_eq!(report.rows[0].week1_total, 28.0);
    assert_eq!(report.rows[0].week2_total, 12.0);
}

#[test]
fn test_very_short_history_leaves_week2_empty() {
    let report = evaluate(
        &daily_table("A消耗", &[5.0; 10]),
        &InventoryTable::default(),
        &single_item_catalog(),
    );

    assert_eq!(report.window.week1_days, 10);
    assert_eq!(report.window.week2_days, 0);
    assert_eq!(report.window.split, report.window.end);
    let row = &report.rows[0];
    assert_eq!(row.week2_total, 0.0);
    assert_eq!(row.growth_rate_pct, -100.0);
    assert_eq!(row.restock_qty, 0);
}

// ==========================================
// 参数
// ==========================================

#[test]
fn test_daily_avg_days_changes_divisor() {
    let consumption = daily_table("A消耗", &two_window_values(100.0, 140.0));
    let params = RestockParams {
        daily_avg_days: 7,
        ..RestockParams::default()
    };
    let rows = RestockEngine::new()
        .compute_recommendations(&consumption, &InventoryTable::default(), &single_item_catalog(), &params)
        .unwrap();

    assert_eq!(rows[0].daily_average, 20.0);
    assert_eq!(rows[0].restock_qty, 980); // 20 × 35 × 1.4
}

#[test]
fn test_invalid_params_rejected() {
    let consumption = daily_table("A消耗", &two_window_values(100.0, 140.0));
    let params = RestockParams {
        daily_avg_days: 0,
        ..RestockParams::default()
    };
    let err = RestockEngine::new()
        .evaluate(&consumption, &InventoryTable::default(), &single_item_catalog(), &params)
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig(_)));
}

#[test]
fn test_oversized_lead_days_rejected() {
    let consumption = daily_table("A消耗", &two_window_values(100.0, 150.0));
    let params = RestockParams {
        production_days: u32::MAX,
        shipping_days: 1,
        ..RestockParams::default()
    };
    let err = RestockEngine::new()
        .evaluate(&consumption, &InventoryTable::default(), &single_item_catalog(), &params)
        .unwrap_err();
    assert!(matches!(err, EngineError::InvalidConfig(_)));
    assert!(err.to_string().contains("production_days"));
}

// ==========================================
// 错误
// ==========================================

#[test]
fn test_missing_consumption_column() {
    let consumption = daily_table("其他消耗", &two_window_values(1.0, 1.0));
    let err = RestockEngine::new()
        .evaluate(&consumption, &InventoryTable::default(), &single_item_catalog(), &RestockParams::default())
        .unwrap_err();

    match err {
        EngineError::MissingConsumptionColumn { item_id, column } => {
            assert_eq!(item_id, "A");
            assert_eq!(column, "A消耗");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_history_is_error() {
    let consumption = ConsumptionTable::new(vec!["A消耗".to_string()], Vec::<ConsumptionRecord>::new());
    let err = RestockEngine::new()
        .evaluate(&consumption, &InventoryTable::default(), &single_item_catalog(), &RestockParams::default())
        .unwrap_err();
    assert!(matches!(err, EngineError::EmptyConsumptionHistory));
}
