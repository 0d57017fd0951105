use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Staff cli for the order intake server
#[derive(Parser, Debug)]
#[command(name = "order-intake")]
#[command(about = "client cli used by shop staff to place and review orders", version, long_about = None
)]
struct Cli {
    #[arg(long, global = true, default_value = "http://127.0.0.1:8000", help = "Base url of the server")]
    host: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// place a new order
    #[command(arg_required_else_help = true)]
    Order(OrderArgs),
    /// list saved orders, newest first
    Orders,
}

#[derive(Debug, Args)]
struct OrderArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    address: String,
    #[arg(long, default_value = "standard")]
    delivery_type: String,
    #[arg(long, help = "Order total in whole currency units")]
    total_amount: i64,
    #[arg(long = "item", help = "Cart line such as \"2x Shot Glass\", repeatable", value_name = "QTYx NAME", value_parser = parse_cart_item)]
    items: Vec<CartItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
struct CartItem {
    name: String,
    quantity: u32,
}

#[derive(Debug, Serialize)]
struct SaveOrderRequest<'a> {
    name: &'a str,
    phone: &'a str,
    address: &'a str,
    cart: &'a [CartItem],
    delivery_type: &'a str,
    total_amount: i64,
}

#[derive(Debug, Deserialize)]
struct StatusResponse {
    status: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct Order {
    order_id: i64,
    customer_name: String,
    customer_phone: String,
    items_bought: String,
    total_quantity: i64,
    delivery_type: String,
    total_amount: i64,
    order_date: String,
}

fn parse_cart_item(s: &str) -> Result<CartItem, String> {
    let (qty, name) = s
        .split_once("x ")
        .ok_or_else(|| format!("expected \"<qty>x <name>\", got {s:?}"))?;
    let quantity = qty
        .trim()
        .parse::<u32>()
        .map_err(|e| format!("invalid quantity {qty:?}: {e}"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing item name in {s:?}"));
    }
    Ok(CartItem {
        name: name.to_string(),
        quantity,
    })
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();
    let host = args.host.trim_end_matches('/');

    match args.command {
        Commands::Order(order) => {
            println!("placing order for {}", order.name);
            let res = Client::new()
                .post(format!("{}/{}", host, "api/save_order"))
                .json(&SaveOrderRequest {
                    name: &order.name,
                    phone: &order.phone,
                    address: &order.address,
                    cart: &order.items,
                    delivery_type: &order.delivery_type,
                    total_amount: order.total_amount,
                })
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => {
                    let res = res.json::<StatusResponse>().await?;
                    println!("{}: {}", res.status, res.message);
                }
                StatusCode::BAD_REQUEST | StatusCode::INTERNAL_SERVER_ERROR => {
                    let res = res.json::<StatusResponse>().await?;
                    println!("order rejected, {}", res.message);
                }
                unexpected => {
                    println!("got unexpected status code, {}", unexpected);
                }
            }
        }
        Commands::Orders => {
            let res = Client::new()
                .get(format!("{}/{}", host, "admin/orders"))
                .send()
                .await?;
            match res.status() {
                StatusCode::OK => {
                    let orders = res.json::<Vec<Order>>().await?;
                    if orders.is_empty() {
                        println!("no orders yet");
                    }
                    for o in orders {
                        println!(
                            "#{} [{}] {} ({}) {} | {} items | {} | {}",
                            o.order_id,
                            o.order_date,
                            o.customer_name,
                            o.customer_phone,
                            o.items_bought,
                            o.total_quantity,
                            o.delivery_type,
                            o.total_amount
                        );
                    }
                }
                StatusCode::INTERNAL_SERVER_ERROR => {
                    let res = res.json::<StatusResponse>().await?;
                    println!("failed to list orders, {}", res.message);
                }
                unexpected => {
                    println!("got unexpected status code, {}", unexpected);
                }
            }
        }
    };
    Ok(())
}
