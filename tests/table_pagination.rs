use aqreport::formatter::TableFormatter;
use aqreport::table::{Column, DataTable, PageBody, TableOptions};

fn table(n: usize, page_size: usize) -> DataTable<usize> {
    DataTable::new(
        vec![Column::new("n", "N", |n: &usize| Some(n.to_string()))],
        (0..n).collect(),
        TableOptions {
            page_size,
            show_index: true,
            ..TableOptions::default()
        },
    )
}

#[test]
fn test_page_count_and_slices() {
    for n in [0usize, 1, 9, 10, 11, 47, 100] {
        for p in [1usize, 5, 10, 20, 50] {
            let mut t = table(n, p);
            let expected_pages = if n == 0 { 1 } else { n.div_ceil(p) };
            assert_eq!(t.total_pages(), expected_pages, "n={n} p={p}");

            for page in 1..=expected_pages {
                t.go_to_page(page);
                let start = ((page - 1) * p).min(n);
                let end = (page * p).min(n);
                assert_eq!(t.visible_records(), &t.records()[start..end], "n={n} p={p}");

                let indices: Vec<usize> = t
                    .visible_rows()
                    .iter()
                    .map(|r| r[0].parse().unwrap())
                    .collect();
                let expected: Vec<usize> = (start + 1..=end).collect();
                assert_eq!(indices, expected);
            }
        }
    }
}

#[test]
fn test_navigation_edges() {
    let mut t = table(25, 10);
    t.prev_page();
    assert_eq!(t.current_page(), 1);

    t.go_to_page(3);
    t.next_page();
    assert_eq!(t.current_page(), 3);

    t.go_to_page(0);
    assert_eq!(t.current_page(), 1);
}

#[test]
fn test_record_swap_resets_page() {
    let mut t = table(40, 10);
    t.go_to_page(4);
    t.set_records((0..12).collect());
    assert_eq!(t.current_page(), 1);
    assert_eq!(t.total_pages(), 2);
}

#[test]
fn test_empty_render() {
    let t = DataTable::new(
        vec![Column::new("n", "N", |n: &usize| Some(n.to_string()))],
        Vec::new(),
        TableOptions {
            empty_text: "No data".to_string(),
            ..TableOptions::default()
        },
    );
    let view = t.render();
    assert_eq!(view.body, PageBody::Empty("No data".to_string()));

    let out = TableFormatter::new().format_page(&view);
    assert_eq!(out.matches("No data").count(), 1);
}

#[test]
fn test_missing_values_render_as_dash() {
    let t = DataTable::new(
        vec![Column::new("opt", "Opt", |n: &Option<u8>| n.map(|v| v.to_string()))],
        vec![Some(1), None],
        TableOptions::default(),
    );
    let rows = t.visible_rows();
    assert_eq!(rows[0][0], "1");
    assert_eq!(rows[1][0], "-");
}
