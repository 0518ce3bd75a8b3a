use criterion::{Criterion, criterion_group, criterion_main};
use section_grid::{Cell, Row, Section, ValidationReport, resolve_placements, validate_section};
use std::hint::black_box;
use std::iter;

/// Build a tall section where every third row opens a 3-row sidebar and a
/// 2-column header cell, so later rows keep flowing around earlier spans.
fn build_spanning_section(row_count: usize, cols: usize) -> Section {
    let rows = (0..row_count).map(|row_idx| {
        if row_idx % 3 == 0 {
            let mut cells = vec![Cell::new().with_row_span(3), Cell::new().with_col_span(2)];
            cells.extend(iter::repeat_n(Cell::new(), cols.saturating_sub(3)));
            Row::new(cells)
        } else {
            Row::unit_cells(cols - 1)
        }
    });
    Section::new("bench", rows)
}

fn bench_resolve(criterion: &mut Criterion) {
    let section = build_spanning_section(3_000, 24);
    criterion.bench_function("resolve_placements_3000x24", |bencher| {
        bencher.iter(|| {
            let resolution = resolve_placements(black_box(&section.rows));
            black_box(resolution.placements.len());
        });
    });
}

fn bench_validate(criterion: &mut Criterion) {
    let section = build_spanning_section(3_000, 24);
    criterion.bench_function("validate_section_3000x24", |bencher| {
        bencher.iter(|| {
            let mut report = ValidationReport::new();
            validate_section(black_box(&section), &mut report);
            black_box(report.len());
        });
    });
}

criterion_group!(validate_benches, bench_resolve, bench_validate);
criterion_main!(validate_benches);
