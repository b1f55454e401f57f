use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct Metrics {
    map_renders: AtomicU64,
    timeline_renders: AtomicU64,
    timeline_prompts: AtomicU64,
}

impl Metrics {
    pub fn record_map_render(&self) {
        self.map_renders.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_timeline_render(&self, prompted: bool) {
        self.timeline_renders.fetch_add(1, Ordering::Relaxed);
        if prompted {
            self.timeline_prompts.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn render_prometheus(&self) -> String {
        let map_renders = self.map_renders.load(Ordering::Relaxed);
        let timeline_renders = self.timeline_renders.load(Ordering::Relaxed);
        let timeline_prompts = self.timeline_prompts.load(Ordering::Relaxed);

        format!(
            "# TYPE lockerdash_map_renders_total counter\n\
lockerdash_map_renders_total {}\n\
# TYPE lockerdash_timeline_renders_total counter\n\
lockerdash_timeline_renders_total {}\n\
# TYPE lockerdash_timeline_prompts_total counter\n\
lockerdash_timeline_prompts_total {}\n",
            map_renders, timeline_renders, timeline_prompts
        )
    }
}
