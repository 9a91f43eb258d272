//! Flex 示例程序：搭建一个完整页面并输出布局结果

use mini_flex::ui::{
    Align, Button, ElementSnapshot, FlexDirection, Justify, Label, Node, View,
};
use mini_flex::{percent, Color, LayoutConfig, LayoutEngine};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // 可选的配置文件
    let config = match std::env::args().nth(1) {
        Some(path) => LayoutConfig::from_json(&std::fs::read_to_string(&path)?)?,
        None => LayoutConfig::default(),
    };
    println!("🚀 Flex demo, viewport {}x{}", config.viewport_width, config.viewport_height);

    let root = build_page();
    responsive_grid(&root);

    let mut engine = LayoutEngine::new(config);
    engine.compute(&root)?;
    println!("✅ Layout computed: {} elements", engine.node_count());

    let snapshot = ElementSnapshot::capture(&root);
    for name in ["header", "sidebar", "main", "footer", "grid-row"] {
        if let Some(el) = snapshot.find(name) {
            println!(
                "   - {:<10} ({}, {}, {}, {})",
                name, el.layout.x, el.layout.y, el.layout.width, el.layout.height
            );
        }
    }

    println!("{}", snapshot.to_json()?);
    Ok(())
}

/// 页面：标题、侧栏 + 内容区、三个按钮的底栏
fn build_page() -> Node<View> {
    let container = Node::new(View::new());
    container
        .flex()
        .name("container")
        .direction(FlexDirection::Column)
        .justify_content(Justify::Center)
        .align_items(Align::Center)
        .width(percent(100))
        .height(percent(100))
        .background_color(Color::GRAY)
        .padding(20.0);

    let header = Node::new(Label::new("FlexLayout Example"));
    header
        .flex()
        .name("header")
        .width(percent(100))
        .height(60.0)
        .background_color(Color::BLUE)
        .margin_bottom(20.0)
        .border_radius(10.0)
        .justify_content(Justify::Center)
        .align_items(Align::Center);

    let content = Node::new(View::new());
    content
        .flex()
        .name("content")
        .direction(FlexDirection::Row)
        .justify_content(Justify::SpaceBetween)
        .width(percent(100))
        .grow(1.0)
        .background_color(Color::WHITE)
        .padding(15.0)
        .border_radius(8.0)
        .define(|flex| {
            // 左侧栏
            flex.add_child()
                .name("sidebar")
                .width(200.0)
                .height(percent(100))
                .background_color(Color::LIGHT_GRAY)
                .margin_right(20.0)
                .border_radius(5.0);

            // 主内容
            flex.add_child()
                .name("main")
                .grow(1.0)
                .background_color(Color::CYAN)
                .border_radius(5.0)
                .padding(20.0);
        });

    let footer = Node::new(View::new());
    footer
        .flex()
        .name("footer")
        .direction(FlexDirection::Row)
        .justify_content(Justify::Center)
        .width(percent(100))
        .height(40.0)
        .background_color(Color::DARK_GRAY)
        .margin_top(20.0)
        .border_radius(5.0)
        .define(|flex| {
            for i in 0..3 {
                let button = flex
                    .add_child_of::<Button>()
                    .name(&format!("button-{i}"))
                    .width(80.0)
                    .height(30.0)
                    .margin_horizontal(5.0)
                    .border_radius(3.0)
                    .background_color(Color::BLUE);
                button.element(|b| {
                    b.label = format!("Button {}", i + 1);
                    b.set_on_click(move || println!("button {} clicked", i + 1));
                });
            }
        });

    container.add(&header.erase());
    container.add(&content.erase());
    container.add(&footer.erase());
    container
}

/// 百分比栅格：25% / 50% / 25%
fn responsive_grid(root: &Node<View>) {
    let row = Node::new(View::new());
    row.flex()
        .name("grid-row")
        .direction(FlexDirection::Row)
        .width(percent(100))
        .height(100.0)
        .margin_bottom(10.0)
        .define(|row| {
            row.add_child()
                .width(percent(25))
                .height(percent(100))
                .background_color(Color::RED)
                .margin_right(10.0);

            row.add_child()
                .width(percent(50))
                .height(percent(100))
                .background_color(Color::GREEN)
                .margin_right(10.0);

            row.add_child()
                .width(percent(25))
                .height(percent(100))
                .background_color(Color::BLUE);
        });

    root.flex()
        .define(|flex| flex.add_child().name("responsive").margin_top(20.0).add_element(&row));
}
