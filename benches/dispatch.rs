use actioneer::controller::{Action, ActionConfigError, ActionTable, Controller};
use actioneer::dispatcher::{ActionDispatcher, ActionResponse};
use actioneer::request::{ActionRequest, RequestParts};
use actioneer::runtime_config::RuntimeConfig;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use http::Method;
use serde_json::json;

struct Board;

impl Board {
    fn threads(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("threads"))
    }

    fn reply(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("reply"))
    }

    fn preview(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("preview"))
    }

    fn index(&mut self, _req: &ActionRequest) -> ActionResponse {
        ActionResponse::ok(json!("index"))
    }
}

impl Controller for Board {
    fn actions() -> Result<ActionTable<Self>, ActionConfigError> {
        ActionTable::builder()
            .url_param("page", "1")
            .handle("threads", Board::threads)
            .action(Action::new("reply", Board::reply).accepts(&[Method::POST]))
            .action(Action::new("preview", Board::preview).ajax_only())
            .default_action(Board::index)
            .build()
    }

    fn create(_req: &ActionRequest) -> Self {
        Board
    }
}

fn bench_resolution(c: &mut Criterion) {
    let dispatcher: ActionDispatcher<Board> =
        ActionDispatcher::with_config(RuntimeConfig::default()).expect("table should build");
    // One of each resolution path: plain hit, slugified hit, collapse,
    // transliteration, pattern rejection.
    let requests = [
        RequestParts::new(Method::GET).param("action", "threads"),
        RequestParts::new(Method::GET).param("action", "Threads"),
        RequestParts::new(Method::GET).param("action", "_private"),
        RequestParts::new(Method::GET).param("action", "сохранить"),
        RequestParts::new(Method::GET).param("action", "9lives"),
        RequestParts::new(Method::GET),
    ];
    c.bench_function("resolve_action_name", |b| {
        b.iter(|| {
            for parts in requests.iter() {
                let req = dispatcher.resolve(parts.clone());
                black_box(req.action());
            }
        })
    });
}

fn bench_dispatch(c: &mut Criterion) {
    let dispatcher: ActionDispatcher<Board> =
        ActionDispatcher::with_config(RuntimeConfig::default()).expect("table should build");
    let requests = [
        // Handler hit, accepts hit, ajax hit, fallback, default.
        RequestParts::new(Method::GET).param("action", "threads"),
        RequestParts::new(Method::POST).param("action", "reply"),
        RequestParts::new(Method::GET).param("action", "preview").ajax(),
        RequestParts::new(Method::GET).param("action", "missing"),
        RequestParts::new(Method::GET),
    ];
    c.bench_function("dispatch", |b| {
        b.iter(|| {
            for parts in requests.iter() {
                let res = dispatcher.dispatch(parts.clone());
                black_box(&res);
            }
        })
    });
}

criterion_group!(benches, bench_resolution, bench_dispatch);
criterion_main!(benches);
