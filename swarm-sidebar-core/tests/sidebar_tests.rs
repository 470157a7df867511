#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! End-to-end tests: polled pool list → menu tree → activation state → stylesheet links.

use std::sync::Arc;

use async_trait::async_trait;
use swarm_sidebar_core::services::menu_catalog::{LABEL_COLORS, LABEL_POOLS, LABEL_THEMES};
use swarm_sidebar_core::services::NavigationRequest;
use swarm_sidebar_core::types::{
    DeviceClass, LayoutContext, MenuMode, Pool, StylesheetKind, StylesheetLinks,
};
use swarm_sidebar_core::{CoreResult, LevelId, MenuActivation, MenuListBuilder, PoolSource};
use tokio::sync::Mutex;

// ===== Mock Implementations =====

/// Pool source that always answers with the list it currently holds.
struct FixedPoolSource {
    pools: Mutex<Vec<Pool>>,
}

impl FixedPoolSource {
    fn new(pools: Vec<Pool>) -> Self {
        Self {
            pools: Mutex::new(pools),
        }
    }

    async fn replace(&self, pools: Vec<Pool>) {
        *self.pools.lock().await = pools;
    }
}

#[async_trait]
impl PoolSource for FixedPoolSource {
    async fn get_pools(&self) -> CoreResult<Vec<Pool>> {
        Ok(self.pools.lock().await.clone())
    }
}

fn root_index(builder: &MenuListBuilder, label: &str) -> usize {
    builder
        .model()
        .iter()
        .position(|n| n.label == label)
        .expect("root entry missing")
}

// ===== Tests =====

#[tokio::test]
async fn single_pool_yields_all_ecosystem_and_pool_entry() {
    let source = Arc::new(FixedPoolSource::new(vec![Pool::new("a", "Alpha")]));
    let mut builder = MenuListBuilder::new(source);
    builder.refresh().await;

    let pools = &builder.model()[root_index(&builder, LABEL_POOLS)];
    let entries: Vec<_> = pools
        .children
        .iter()
        .map(|n| (n.label.as_str(), n.route_path().unwrap()))
        .collect();
    assert_eq!(
        entries,
        vec![("All ecosystem", "/pool/all"), ("Alpha", "pool/a")]
    );
}

#[tokio::test]
async fn equal_list_from_a_new_instance_keeps_tree() {
    let source = Arc::new(FixedPoolSource::new(vec![
        Pool::new("a", "Alpha"),
        Pool::new("b", "Beta"),
    ]));
    let mut builder = MenuListBuilder::new(source.clone());
    builder.refresh().await;
    let tree = builder.model().to_vec();

    source
        .replace(vec![Pool::new("a", "Alpha"), Pool::new("b", "Beta")])
        .await;
    assert!(!builder.refresh().await);
    assert_eq!(builder.model(), tree.as_slice());
    assert_eq!(builder.revision(), 1);
}

#[tokio::test]
async fn theme_click_rewrites_theme_stylesheet() {
    let source = Arc::new(FixedPoolSource::new(Vec::new()));
    let mut builder = MenuListBuilder::new(source);
    builder.refresh().await;

    let model = builder.model();
    let mut activation = MenuActivation::build(model);
    let mut ctx = LayoutContext::new(MenuMode::Static, DeviceClass::Desktop);
    let mut links = StylesheetLinks::default();

    let colors_index = root_index(&builder, LABEL_COLORS);
    activation.click(model, LevelId::ROOT, colors_index, &mut ctx, &mut links);
    let colors = activation.child_level(LevelId::ROOT, colors_index).unwrap();

    let themes_index = model[colors_index]
        .children
        .iter()
        .position(|n| n.label == LABEL_THEMES)
        .unwrap();
    activation.click(model, colors, themes_index, &mut ctx, &mut links);
    let themes = activation.child_level(colors, themes_index).unwrap();

    let teal = activation
        .items(model, themes)
        .unwrap()
        .iter()
        .position(|n| n.label == "Teal - Red")
        .unwrap();
    let outcome = activation.click(model, themes, teal, &mut ctx, &mut links);

    assert!(outcome.handled);
    assert!(outcome.navigation.is_none());
    assert_eq!(links.href("theme-css"), Some("assets/theme/theme-teal.css"));
    assert_eq!(links.current(StylesheetKind::Theme), Some("teal"));
}

#[tokio::test]
async fn horizontal_leaf_click_collapses_menu_after_reset_broadcast() {
    let source = Arc::new(FixedPoolSource::new(vec![Pool::new("a", "Alpha")]));
    let mut builder = MenuListBuilder::new(source);
    builder.refresh().await;

    let model = builder.model();
    let mut activation = MenuActivation::build(model);
    let mut ctx = LayoutContext::new(MenuMode::Horizontal, DeviceClass::Desktop);
    let mut links = StylesheetLinks::default();

    let pools_index = root_index(&builder, LABEL_POOLS);
    activation.click(model, LevelId::ROOT, pools_index, &mut ctx, &mut links);
    let pools = activation.child_level(LevelId::ROOT, pools_index).unwrap();
    let outcome = activation.click(model, pools, 1, &mut ctx, &mut links);

    assert_eq!(outcome.navigation, Some(NavigationRequest::Route("pool/a".into())));
    assert!(ctx.reset_menu);

    activation.broadcast_reset(model, ctx.reset_menu, &ctx);
    assert_eq!(activation.level(LevelId::ROOT).unwrap().active_index(), None);
    assert_eq!(activation.level(pools).unwrap().active_index(), None);
}
