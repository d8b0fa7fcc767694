use chrono::Utc;
use oci_cidr_rewrite::args::Args;
use oci_cidr_rewrite::init_client;
use oci_cidr_rewrite::output::print_summary;
use oci_cidr_rewrite::run_append;

fn main() {
    let args = Args::parse_or_exit("oci-cidr-append");

    println!("{}", args.compartment_ocid);
    println!("{}", args.cidr_to_find);
    println!("{}", args.cidr_to_add);
    println!("{}", args.rule_description);

    let client = match init_client() {
        Ok(client) => client,
        Err(e) => {
            println!("Error creating OCI client: {e}");
            std::process::exit(1);
        }
    };
    log::info!("#Start append");

    let start = Utc::now();
    let summary = run_append(&client, &args.compartment_ocid, &args.change());
    print_summary("append", &summary, Utc::now() - start);
}
