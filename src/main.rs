use chrono::Utc;
use oci_cidr_rewrite::args::Args;
use oci_cidr_rewrite::init_client;
use oci_cidr_rewrite::output::print_summary;
use oci_cidr_rewrite::run_rewrite;

fn main() {
    // Do as little as possible in main.rs as it can't contain any tests
    let args = Args::parse_or_exit("oci-cidr-rewrite");

    println!("{}", args.compartment_ocid);
    println!("{}", args.cidr_to_find);
    println!("{}", args.cidr_to_add);

    let client = match init_client() {
        Ok(client) => client,
        Err(e) => {
            println!("Error creating OCI client: {e}");
            std::process::exit(1);
        }
    };
    log::info!("#Start main()");

    let start = Utc::now();
    let summary = run_rewrite(&client, &args.compartment_ocid, &args.change());
    print_summary("rewrite", &summary, Utc::now() - start);
}
