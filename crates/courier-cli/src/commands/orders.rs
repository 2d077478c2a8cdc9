use crate::commands::extract::extract_records;
use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{now_utc, read_input};
use anyhow::Result;
use clap::Args;
use courier_core::{OrderBook, OrderListDto, OrderStatus, StoreId, StoreRef};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct OrdersArgs {
    /// File with pasted customer text; reads stdin when omitted or `-`
    pub file: Option<PathBuf>,
    #[arg(long)]
    pub store_id: Option<u64>,
    #[arg(long, requires = "store_id")]
    pub store_name: Option<String>,
    /// Only list orders in this status (pending, picked_up, delivered)
    #[arg(long)]
    pub status: Option<String>,
}

pub fn import_orders(ctx: &Context, args: OrdersArgs) -> Result<()> {
    let status = args
        .status
        .as_deref()
        .map(str::parse::<OrderStatus>)
        .transpose()?;
    let store = match (args.store_id, args.store_name) {
        (Some(id), name) => {
            let name = name.unwrap_or_else(|| format!("Store {id}"));
            if name.trim().is_empty() {
                return Err(invalid_input("--store-name cannot be empty"));
            }
            Some(StoreRef {
                id: StoreId::new(id),
                name: name.trim().to_string(),
            })
        }
        (None, _) => None,
    };

    let records = extract_records(ctx, &read_input(args.file.as_deref())?)?;
    let mut book = OrderBook::new();
    book.import_records(&records, store, now_utc())?;

    let mut listing = OrderListDto::from(&book);
    if let Some(status) = status {
        listing.orders.retain(|order| order.status == status);
    }

    if ctx.json {
        return print_json(&listing);
    }

    for order in &listing.orders {
        let store = order
            .draft
            .store
            .as_ref()
            .map(|store| format!(" @ {}", store.name))
            .unwrap_or_default();
        println!(
            "#{} {} • {} • {} [{}]{}",
            order.id,
            order.draft.customer_name,
            order.draft.customer_phone,
            order.draft.customer_location,
            order.status.label(),
            store
        );
    }
    println!(
        "pending {}, picked up {}, delivered {}",
        listing.counts.pending, listing.counts.picked_up, listing.counts.delivered
    );
    Ok(())
}
