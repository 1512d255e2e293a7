use clap::{Parser, Subcommand};
use config::TicketingConfig;
use serde_json::Value;
use ticketing_client::clarity::{ClarityValue, WireValue, encode};
use ticketing_client::logging;
use ticketing_client::service::{
    BnsService, BuyTicketParams, ClaimPresentParams, ContractCall, ContractService,
    CreateEventParams, CreatePresentParams, TransferTicketParams, UpdateEventParams,
};

/// Query and prepare calls for the Stacks ticketing contract
#[derive(Parser, Debug)]
#[command(name = "ticketing", author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    args: config::Args,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show a single event
    Event { id: u128 },

    /// List events, newest first
    Events {
        /// First event id to list; also the id assigned to the first listed
        /// event. Contract ids start at 1.
        #[arg(long, default_value_t = 1)]
        start_id: u128,
    },

    /// List gift presents
    Presents {
        /// First present id to list; also the id assigned to the first listed
        /// present. Contract ids start at 1.
        #[arg(long, default_value_t = 1)]
        start_id: u128,
    },

    /// Show a ticket's owner and event
    Ticket { id: u128 },

    /// Show the contract admin
    Admin {
        /// Check whether this address is the admin
        #[arg(long)]
        check: Option<String>,
    },

    /// Show total events and tickets
    Totals,

    /// Check whether a principal owns a ticket
    IsOwner { ticket_id: u128, owner: String },

    /// Look up the BNS name of an address
    Bns { address: String },

    /// Validate a wire-format Clarity value and print its canonical form
    Encode { json: String },

    /// Build an unsigned public function call
    Call {
        #[command(subcommand)]
        call: CallCommand,
    },
}

#[derive(Subcommand, Debug)]
enum CallCommand {
    CreateEvent {
        name: String,
        description: String,
        venue: String,
        /// Unix timestamp, seconds
        date: u128,
        /// Price per ticket in micro-STX
        price: u128,
        total_tickets: u128,
    },
    BuyTicket {
        event_id: u128,
        #[arg(default_value_t = 1)]
        amount: u128,
    },
    TransferTicket {
        ticket_id: u128,
        new_owner: String,
    },
    UpdateEvent {
        event_id: u128,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        venue: Option<String>,
        #[arg(long)]
        price: Option<u128>,
    },
    CancelEvent {
        event_id: u128,
    },
    SetAdmin {
        new_admin: String,
    },
    CreatePresent {
        title: String,
        /// Amount in micro-STX
        amount: u128,
        password: String,
    },
    ClaimPresent {
        present_id: u128,
        password: String,
    },
    WithdrawPresent {
        present_id: u128,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = TicketingConfig::from_env_file(&cli.args.env_file)?;
    let _log_guard = logging::init_with_config((&config.log).into())?;

    tracing::debug!(
        contract = %config.contract.identifier(),
        network = %config.contract.network,
        api = %config.contract.api_base(),
        "Loaded configuration"
    );

    let service = ContractService::from_config(&config)?;

    let output = match cli.command {
        Command::Event { id } => serde_json::to_value(service.get_event_info(id).await?)?,
        Command::Events { start_id } => serde_json::to_value(service.get_events(start_id).await?)?,
        Command::Presents { start_id } => {
            serde_json::to_value(service.get_all_presents(start_id).await?)?
        }
        Command::Ticket { id } => serde_json::to_value(service.get_ticket(id).await?)?,
        Command::Admin { check: None } => serde_json::json!({ "admin": service.get_admin().await? }),
        Command::Admin {
            check: Some(address),
        } => serde_json::json!({
            "address": address,
            "isAdmin": service.is_admin(&address).await?,
        }),
        Command::Totals => {
            let (events, tickets) =
                futures::try_join!(service.get_total_events(), service.get_total_tickets())?;
            serde_json::json!({
                "totalEvents": events.to_string(),
                "totalTickets": tickets.to_string(),
            })
        }
        Command::IsOwner { ticket_id, owner } => serde_json::json!({
            "ticketId": ticket_id.to_string(),
            "owner": owner,
            "isOwner": service.is_ticket_owner(ticket_id, &owner).await?,
        }),
        Command::Bns { address } => {
            let bns = BnsService::from_config(&config)?;
            serde_json::json!({
                "address": address,
                "name": bns.get_bns_name(&address).await?,
            })
        }
        Command::Encode { json } => {
            let raw: Value = serde_json::from_str(&json)?;
            let value: ClarityValue = WireValue::from_json(&raw)?.into();
            encode(&value).to_json()?
        }
        Command::Call { call } => serde_json::to_value(build_call(service.contract(), call)?)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn build_call(
    contract: &config::ContractConfig,
    call: CallCommand,
) -> Result<ContractCall, ticketing_client::ServiceError> {
    match call {
        CallCommand::CreateEvent {
            name,
            description,
            venue,
            date,
            price,
            total_tickets,
        } => ContractCall::create_event(
            contract,
            &CreateEventParams {
                name,
                description,
                venue,
                date,
                price,
                total_tickets,
            },
        ),
        CallCommand::BuyTicket { event_id, amount } => {
            ContractCall::buy_ticket(contract, BuyTicketParams { event_id, amount })
        }
        CallCommand::TransferTicket {
            ticket_id,
            new_owner,
        } => ContractCall::transfer_ticket(
            contract,
            &TransferTicketParams {
                ticket_id,
                new_owner,
            },
        ),
        CallCommand::UpdateEvent {
            event_id,
            name,
            description,
            venue,
            price,
        } => ContractCall::update_event(
            contract,
            &UpdateEventParams {
                event_id,
                name,
                description,
                venue,
                price,
            },
        ),
        CallCommand::CancelEvent { event_id } => Ok(ContractCall::cancel_event(contract, event_id)),
        CallCommand::SetAdmin { new_admin } => ContractCall::set_admin(contract, &new_admin),
        CallCommand::CreatePresent {
            title,
            amount,
            password,
        } => ContractCall::create_present(
            contract,
            &CreatePresentParams {
                title,
                amount,
                password,
            },
        ),
        CallCommand::ClaimPresent {
            present_id,
            password,
        } => ContractCall::claim_present(
            contract,
            &ClaimPresentParams {
                present_id,
                password,
            },
        ),
        CallCommand::WithdrawPresent { present_id } => {
            Ok(ContractCall::withdraw_present(contract, present_id))
        }
    }
}
