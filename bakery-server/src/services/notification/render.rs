//! Confirmation email rendering

use html_escape::encode_text;
use shared::models::Order;

use crate::services::money::line_total;

/// Rendered confirmation, plain and HTML bodies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub subject: String,
    pub text: String,
    pub html: String,
}

fn special_requests(order: &Order) -> Option<&str> {
    order
        .special_requests
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub fn render_confirmation(order: &Order, business_name: &str) -> Confirmation {
    let subject = format!(
        "Order Confirmation #{} - {}",
        order.short_id(),
        business_name
    );

    // Plain text
    let mut text = format!(
        "Dear {},\n\n\
         Thank you for your order at {}!\n\n\
         Order ID: {}\n\
         Pickup Time: {}\n\n\
         Items:\n",
        order.customer_name,
        business_name,
        order.short_id(),
        order.pickup_time
    );
    for item in &order.items {
        text.push_str(&format!(
            "  {} ×{}  ${:.2}\n",
            item.name,
            item.quantity,
            line_total(item.price, item.quantity)
        ));
    }
    text.push_str(&format!("\nTotal: ${:.2}\n", order.total_amount));
    if let Some(requests) = special_requests(order) {
        text.push_str(&format!("Special Requests: {}\n", requests));
    }
    text.push_str(&format!(
        "\nWe'll have your order ready at the scheduled pickup time.\n\n{}\n",
        business_name
    ));

    // HTML
    let rows: String = order
        .items
        .iter()
        .map(|item| {
            format!(
                "<tr><td>{}</td><td>×{}</td><td>${:.2}</td></tr>",
                encode_text(&item.name),
                item.quantity,
                line_total(item.price, item.quantity)
            )
        })
        .collect();
    let requests_html = special_requests(order)
        .map(|r| format!("<p><strong>Special Requests:</strong> {}</p>", encode_text(r)))
        .unwrap_or_default();
    let html = format!(
        "<html><body>\
         <h2>Thank you for your order, {name}!</h2>\
         <p><strong>Order ID:</strong> {id}<br><strong>Pickup Time:</strong> {pickup}</p>\
         <table>{rows}</table>\
         <p><strong>Total: ${total:.2}</strong></p>\
         {requests}\
         <p>We'll have your order ready at the scheduled pickup time.</p>\
         <p>{business}</p>\
         </body></html>",
        name = encode_text(&order.customer_name),
        id = order.short_id(),
        pickup = encode_text(&order.pickup_time),
        rows = rows,
        total = order.total_amount,
        requests = requests_html,
        business = encode_text(business_name),
    );

    Confirmation {
        subject,
        text,
        html,
    }
}
