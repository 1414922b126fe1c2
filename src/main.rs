use schedsim::{Fcfs, Generator, Metrics, RoundRobin, Segment, SimReport, Sjf, simulate};

fn main() {
    env_logger::init();

    let workload = Generator::new(0).generate(6);

    println!("workload:");
    for p in &workload {
        println!("  P{} arrival={:.2} burst={:.2}", p.pid, p.arrival, p.burst);
    }

    let fcfs = Fcfs::new(1.0).expect("valid switch cost");
    let sjf = Sjf::new(1.0).expect("valid switch cost");
    let rr = RoundRobin::new(4.0, 1.0).expect("valid quantum and switch cost");

    report(&simulate(&fcfs, &workload));
    report(&simulate(&sjf, &workload));
    report(&simulate(&rr, &workload));
}

fn report(run: &SimReport) {
    println!("\n=== {} ===", run.policy);

    print!("timeline: ");
    schedsim::sim::replay(&run.timeline, |_, seg| match seg {
        Segment::Run { pid, start, duration } => {
            print!("P{}[{:.1}..{:.1}) ", pid, start, start + duration)
        }
        Segment::Switch { start, duration } => {
            print!("cs[{:.1}..{:.1}) ", start, start + duration)
        }
    });
    println!();

    println!("pid   arrival   burst   start   completion   turnaround   waiting   response");
    for p in &run.processes {
        println!(
            "P{:<4} {:>7.2} {:>7.2} {:>7.2} {:>12.2} {:>12.2} {:>9.2} {:>10.2}",
            p.pid, p.arrival, p.burst, p.start, p.completion, p.turnaround, p.waiting, p.response
        );
    }

    let metrics = Metrics::from_report(run);
    println!("avg turnaround: {:.2}", metrics.avg_turnaround);
    println!("avg waiting:    {:.2}", metrics.avg_waiting);
    println!("avg response:   {:.2}", metrics.avg_response);
    println!("throughput:     {:.3} processes/unit", metrics.throughput);
    println!("utilization:    {:.1}%", metrics.cpu_utilization);
    println!(
        "switches: {} over {:.1} units",
        metrics.context_switches, metrics.total_time
    );
}
