// --- File: crates/repairtech_mailer/src/template.rs ---
//! The ticket confirmation email, rendered to a self-contained HTML string.

/// Everything the template interpolates. All values are escaped on the way
/// in; customer-supplied text must not become markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketEmailData<'a> {
    pub customer_name: &'a str,
    pub ticket_number: &'a str,
    pub brand: &'a str,
    pub model: &'a str,
    pub issue_description: &'a str,
}

/// Escape text for interpolation into HTML.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Render the ticket confirmation email.
pub fn render_ticket_email(data: &TicketEmailData<'_>) -> String {
    let customer_name = escape_html(data.customer_name);
    let ticket_number = escape_html(data.ticket_number);
    let brand = escape_html(data.brand);
    let model = escape_html(data.model);
    let issue_description = escape_html(data.issue_description);

    format!(
        r#"<div style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, 'Helvetica Neue', Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 20px; background-color: #f9fafb;">
  <div style="background-color: #ffffff; border-radius: 8px; padding: 40px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);">
    <div style="text-align: center; margin-bottom: 32px;">
      <h1 style="font-size: 24px; font-weight: bold; color: #111827; margin: 0 0 8px 0;">RepairTech</h1>
      <p style="font-size: 14px; color: #6b7280; margin: 0;">Servicio Técnico Profesional</p>
    </div>
    <p style="font-size: 16px; color: #374151; margin-bottom: 24px;">Hola {customer_name},</p>
    <p style="font-size: 16px; color: #374151; margin-bottom: 24px;">Hemos recibido tu equipo y lo hemos registrado en nuestro sistema. A continuación encontrarás los detalles de tu ticket de reparación:</p>
    <div style="background-color: #f3f4f6; border: 2px solid #3b82f6; border-radius: 8px; padding: 24px; margin-bottom: 24px; text-align: center;">
      <p style="font-size: 14px; color: #6b7280; margin: 0 0 8px 0; text-transform: uppercase;">Número de Ticket</p>
      <p style="font-size: 32px; font-weight: bold; color: #3b82f6; margin: 0; letter-spacing: 1px;">{ticket_number}</p>
    </div>
    <div style="margin-bottom: 24px;">
      <h2 style="font-size: 18px; color: #111827; margin: 0 0 12px 0;">Detalles del equipo</h2>
      <p style="font-size: 14px; color: #374151; margin: 0 0 4px 0;"><strong>Equipo:</strong> {brand} {model}</p>
      <p style="font-size: 14px; color: #374151; margin: 0;"><strong>Problema reportado:</strong> {issue_description}</p>
    </div>
    <p style="font-size: 14px; color: #6b7280; margin-bottom: 8px;">Puedes consultar el estado de tu reparación en cualquier momento ingresando tu número de ticket en nuestra página de seguimiento.</p>
    <p style="font-size: 14px; color: #6b7280; margin: 0;">Guarda este correo: el número de ticket es tu comprobante.</p>
  </div>
  <p style="text-align: center; font-size: 12px; color: #9ca3af; margin-top: 16px;">RepairTech — Gestión de reparaciones</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TicketEmailData<'static> {
        TicketEmailData {
            customer_name: "Juan Pérez",
            ticket_number: "RT-20250615-0007",
            brand: "Dell",
            model: "Inspiron 15",
            issue_description: "No enciende después de una caída",
        }
    }

    #[test]
    fn test_renders_all_fields() {
        let html = render_ticket_email(&sample());
        assert!(html.contains("Hola Juan Pérez"));
        assert!(html.contains("RT-20250615-0007"));
        assert!(html.contains("Dell Inspiron 15"));
        assert!(html.contains("No enciende después de una caída"));
    }

    #[test]
    fn test_customer_text_is_escaped() {
        let data = TicketEmailData {
            customer_name: "<script>alert(1)</script>",
            issue_description: "pantalla \"rota\" & más",
            ..sample()
        };
        let html = render_ticket_email(&data);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&quot;rota&quot; &amp; más"));
    }
}
