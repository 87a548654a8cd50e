//! Performance benchmarks for layout and frame rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dashshell::app::{App, ViewId};
use dashshell::startup::ShellConfig;
use dashshell::ui::{self, layout::compute_layout};
use ratatui::{backend::TestBackend, Terminal};

const SIZES: [(u16, u16); 4] = [(80, 24), (120, 40), (200, 60), (400, 120)];

fn bench_compute_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_layout");

    for (width, height) in SIZES {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", width, height)),
            &(width, height),
            |b, &(w, h)| b.iter(|| compute_layout(black_box(w), black_box(h))),
        );
    }

    group.finish();
}

/// Full frame: resize the shell, then paint every region into a TestBackend.
fn bench_full_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_frame");

    for view in ViewId::ALL {
        for (width, height) in SIZES {
            let mut app = App::with_config(ShellConfig::default().with_log_file(None));
            if app.switch_view(view).is_err() {
                continue;
            }
            if app.update_terminal_dimensions(width, height).is_err() {
                continue;
            }
            let mut terminal = match Terminal::new(TestBackend::new(width, height)) {
                Ok(terminal) => terminal,
                Err(_) => continue,
            };

            group.bench_function(
                BenchmarkId::new(view.name(), format!("{}x{}", width, height)),
                |b| {
                    b.iter(|| {
                        let _ = terminal.draw(|f| ui::render(f, black_box(app.surface())));
                    })
                },
            );
        }
    }

    group.finish();
}

/// Theme toggle restyles every region and re-pushes header and content.
fn bench_theme_toggle(c: &mut Criterion) {
    let mut app = App::with_config(ShellConfig::default().with_log_file(None));
    c.bench_function("toggle_theme", |b| {
        b.iter(|| black_box(app.toggle_theme()))
    });
}

criterion_group!(
    benches,
    bench_compute_layout,
    bench_full_frame,
    bench_theme_toggle
);
criterion_main!(benches);
