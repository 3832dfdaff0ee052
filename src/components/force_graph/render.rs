use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::glow::GlowFrame;
use super::state::{ForceGraphState, NodeInfo};

const BACKGROUND: &str = "#1a1a1a";
const GLOW_RGB: &str = "255, 214, 120";

/// Draw one frame. Owns no timing: the caller decides when to redraw and
/// passes the halo for that instant.
pub fn render(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, glow: GlowFrame) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx, glow);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k, 6.0 / k);
	ctx.set_stroke_style_str("rgba(100, 180, 255, 0.45)");
	ctx.set_fill_style_str("rgba(100, 180, 255, 0.6)");
	ctx.set_line_width(line_width);

	state.graph.visit_edges(|n1, n2, _| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			return;
		}
		let (r1, r2) = (n1.data.user_data.radius, n2.data.user_data.radius);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(x1 + ux * r1, y1 + uy * r1);
		ctx.line_to(x2 - ux * (r2 + arrow_size), y2 - uy * (r2 + arrow_size));
		ctx.stroke();

		let (tip_x, tip_y) = (x2 - ux * r2, y2 - uy * r2);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d, glow: GlowFrame) {
	let k = state.transform.k;
	ctx.set_font(&format!("{}px sans-serif", 10.0 / k.max(0.5)));

	state.graph.visit_nodes(|node| {
		let info = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let current = state.is_current(info);

		if current {
			draw_glow(ctx, x, y, info, glow);
		}

		ctx.begin_path();
		let _ = ctx.arc(x, y, info.radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(info.color);
		ctx.fill();

		if current {
			ctx.set_stroke_style_str(&format!("rgba({GLOW_RGB}, 0.9)"));
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		if let Some(label) = &info.label {
			ctx.set_fill_style_str(if current { "white" } else { "rgba(255, 255, 255, 0.8)" });
			let _ = ctx.fill_text(label, x + info.radius + 3.0, y + 3.0);
		}
	});
}

fn draw_glow(ctx: &CanvasRenderingContext2d, x: f64, y: f64, info: &NodeInfo, glow: GlowFrame) {
	let glow_radius = info.radius * glow.radius_multiplier;
	let Ok(gradient) = ctx.create_radial_gradient(x, y, info.radius * 0.5, x, y, glow_radius) else {
		return;
	};
	let _ = gradient.add_color_stop(0.0, &format!("rgba({GLOW_RGB}, {})", glow.opacity));
	let _ = gradient.add_color_stop(1.0, &format!("rgba({GLOW_RGB}, 0)"));
	ctx.begin_path();
	let _ = ctx.arc(x, y, glow_radius, 0.0, 2.0 * PI);
	#[allow(deprecated)]
	ctx.set_fill_style(&gradient);
	ctx.fill();
}
