use crate::domain::model::{GlobalTaxSettings, TicketColumn};
use crate::domain::ports::TicketPricing;
use rust_decimal::Decimal;

/// Derives the "net" and "tax" display values for tickets and owns the
/// mode-dependent column layout of the booking table. Stateless; everything is
/// computed from the host's price primitives on each call.
pub struct TicketPriceDisplay;

impl TicketPriceDisplay {
    pub fn net_amount(ticket: &impl TicketPricing) -> Decimal {
        ticket.price_without_tax()
    }

    pub fn tax_amount(ticket: &impl TicketPricing) -> Decimal {
        ticket.price_with_tax() - ticket.price_without_tax()
    }

    pub fn render_net_cell(ticket: &impl TicketPricing) -> String {
        ticket.format_price(Self::net_amount(ticket))
    }

    pub fn render_tax_cell(ticket: &impl TicketPricing) -> String {
        ticket.format_price(Self::tax_amount(ticket))
    }

    /// Column order for the ticket booking table. With additive tax the net
    /// price gets its own column; in inclusive mode the listed price already
    /// carries the tax, so no separate net column is shown.
    pub fn ticket_columns(settings: &GlobalTaxSettings) -> Vec<TicketColumn> {
        use TicketColumn::*;
        if settings.tax_inclusive {
            vec![Type, Price, Tax, Spaces]
        } else {
            vec![Type, Net, Tax, Price, Spaces]
        }
    }
}
