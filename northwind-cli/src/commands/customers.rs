//! Customer commands
//!
//! Commands: list, get, add, update, delete

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use northwind_db::{Customer, CustomerRepo};
use sqlx::MySqlPool;

use super::{print_done, print_not_found, print_record, print_records, Format};

#[derive(Parser, Debug)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomerCommands,
}

#[derive(Subcommand, Debug)]
pub enum CustomerCommands {
    /// List every customer
    List,
    /// Show one customer by its code
    Get(CustomerKeyArgs),
    /// Add a customer under a new code
    Add(AddCustomerArgs),
    /// Change the given fields of an existing customer
    Update(UpdateCustomerArgs),
    /// Delete a customer by its code
    Delete(CustomerKeyArgs),
}

#[derive(Parser, Debug)]
pub struct CustomerKeyArgs {
    /// Customer code (e.g. ALFKI)
    customer_id: String,
}

#[derive(Parser, Debug)]
pub struct AddCustomerArgs {
    /// Customer code (e.g. ALFKI)
    customer_id: String,

    /// Company name
    #[arg(long)]
    company: String,

    #[command(flatten)]
    fields: CustomerFields,
}

#[derive(Parser, Debug)]
pub struct UpdateCustomerArgs {
    /// Customer code (e.g. ALFKI)
    customer_id: String,

    /// Company name
    #[arg(long)]
    company: Option<String>,

    #[command(flatten)]
    fields: CustomerFields,
}

/// Optional customer columns; only the given ones are written.
#[derive(Args, Debug, Default)]
pub struct CustomerFields {
    /// Contact person
    #[arg(long)]
    contact_name: Option<String>,
    /// Contact person's title
    #[arg(long)]
    contact_title: Option<String>,
    /// Street address
    #[arg(long = "street", id = "street", value_name = "ADDRESS")]
    address: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    region: Option<String>,
    #[arg(long)]
    postal_code: Option<String>,
    #[arg(long)]
    country: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    fax: Option<String>,
}

impl CustomerFields {
    fn apply(self, customer: &mut Customer) {
        let Self {
            contact_name,
            contact_title,
            address,
            city,
            region,
            postal_code,
            country,
            phone,
            fax,
        } = self;
        for (value, column) in [
            (contact_name, &mut customer.contact_name),
            (contact_title, &mut customer.contact_title),
            (address, &mut customer.address),
            (city, &mut customer.city),
            (region, &mut customer.region),
            (postal_code, &mut customer.postal_code),
            (country, &mut customer.country),
            (phone, &mut customer.phone),
            (fax, &mut customer.fax),
        ] {
            if value.is_some() {
                *column = value;
            }
        }
    }
}

pub async fn run_customers(pool: &MySqlPool, args: CustomersArgs, format: Format) -> Result<()> {
    let repo = CustomerRepo::new(pool);

    match args.command {
        CustomerCommands::List => {
            let customers = repo.get_all().await?;
            print_records(&customers, format)
        }
        CustomerCommands::Get(args) => match repo.find(&args.customer_id).await? {
            Some(customer) => print_record(&customer, format),
            None => print_not_found("customer", &args.customer_id, format),
        },
        CustomerCommands::Add(args) => {
            let mut customer = Customer::new(args.customer_id, args.company);
            args.fields.apply(&mut customer);
            let customer = repo.add(customer).await?;
            print_done(format!("added customer '{}'", customer.customer_id), format);
            print_record(&customer, format)
        }
        CustomerCommands::Update(args) => {
            let mut customer = repo
                .find(&args.customer_id)
                .await?
                .with_context(|| format!("customer '{}' not found", args.customer_id))?;
            if let Some(company) = args.company {
                customer.company_name = company;
            }
            args.fields.apply(&mut customer);
            repo.update(&customer).await?;
            print_done(format!("updated customer '{}'", customer.customer_id), format);
            print_record(&customer, format)
        }
        CustomerCommands::Delete(args) => {
            repo.delete(&args.customer_id).await?;
            print_done(format!("deleted customer '{}'", args.customer_id), format);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_given_fields_are_applied() {
        let mut customer = Customer::new("ALFKI", "Alfreds Futterkiste");
        customer.city = Some("Berlin".into());
        customer.phone = Some("030-0074321".into());

        CustomerFields {
            phone: Some("030-0076545".into()),
            country: Some("Germany".into()),
            ..Default::default()
        }
        .apply(&mut customer);

        assert_eq!(customer.city.as_deref(), Some("Berlin"));
        assert_eq!(customer.phone.as_deref(), Some("030-0076545"));
        assert_eq!(customer.country.as_deref(), Some("Germany"));
        assert_eq!(customer.fax, None);
    }
}
