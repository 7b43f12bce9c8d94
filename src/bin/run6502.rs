//! Host runner for raw 6502 program images.
//!
//! Loads a binary image into flat memory, resets the CPU at the load
//! address, and executes until the program finishes, an illegal opcode
//! halts the core, or the budget runs out.
//!
//! Completion convention: the program's top-level RTS pops past the reset
//! stack top, leaving SP at 0xFF. The core knows nothing about this; the
//! runner watches SP between instructions. On exit it prints a post-mortem
//! dump of the zero page, the stack page, and the registers.

use std::process;

use clap::{Arg, ArgAction, Command};

use mos6502::{CycleMethod, FlatMemory, MemoryBus, CPU};

fn main() {
    let matches = Command::new("run6502")
        .version(env!("CARGO_PKG_VERSION"))
        .about("NMOS 6502 emulator")
        .arg(
            Arg::new("image")
                .value_name("IMAGE")
                .required(true)
                .help("Raw binary program image"),
        )
        .arg(
            Arg::new("at")
                .short('a')
                .long("at")
                .value_name("HEXADDR")
                .default_value("0x0300")
                .help("Load address and initial PC, e.g. 0x0300"),
        )
        .arg(
            Arg::new("budget")
                .short('b')
                .long("budget")
                .value_name("N")
                .help("Execution budget (cycles, or instructions with --by-instructions)"),
        )
        .arg(
            Arg::new("by-instructions")
                .long("by-instructions")
                .action(ArgAction::SetTrue)
                .help("Charge the budget one unit per instruction instead of per cycle"),
        )
        .get_matches();

    let image_path = matches.get_one::<String>("image").unwrap();
    let start = parse_hex_addr(matches.get_one::<String>("at").unwrap());

    let budget: i64 = match matches.get_one::<String>("budget") {
        Some(s) => s.parse().unwrap_or_else(|_| {
            eprintln!("error: '{}' is not a valid budget", s);
            process::exit(1);
        }),
        None => i64::MAX,
    };

    let method = if matches.get_flag("by-instructions") {
        CycleMethod::InstructionCount
    } else {
        CycleMethod::CycleCount
    };

    let image = std::fs::read(image_path).unwrap_or_else(|err| {
        eprintln!("error: could not read {}: {}", image_path, err);
        process::exit(1);
    });

    let mut memory = FlatMemory::new();
    memory.load(start, &image);

    let mut cpu = CPU::new(memory);
    cpu.reset(start);

    let mut cycles = 0u64;
    let mut remaining = budget;
    let outcome = loop {
        if remaining <= 0 {
            break "budget exhausted";
        }

        let opcode = cpu.memory().read(cpu.pc());
        let before = cycles;
        cpu.run(1, &mut cycles, CycleMethod::InstructionCount);

        if cpu.illegal_opcode() {
            break "illegal opcode";
        }
        // Top-level RTS popped past the reset stack top.
        if opcode == 0x60 && cpu.sp() == 0xFF {
            break "emulation complete";
        }

        remaining -= match method {
            CycleMethod::CycleCount => (cycles - before) as i64,
            CycleMethod::InstructionCount => 1,
        };
    };

    println!("{}", outcome);
    dump(&cpu, cycles);
}

fn parse_hex_addr(text: &str) -> u16 {
    let digits = text
        .trim_start_matches("0x")
        .trim_start_matches("0X")
        .trim_start_matches('$');
    u16::from_str_radix(digits, 16).unwrap_or_else(|_| {
        eprintln!("error: '{}' is not a valid hex address", text);
        process::exit(1);
    })
}

fn dump(cpu: &CPU<FlatMemory>, cycles: u64) {
    println!("zero page:");
    for row in 0..16u16 {
        let line: Vec<String> = (0..16u16)
            .map(|col| format!("{:02X}", cpu.memory().read(row * 16 + col)))
            .collect();
        println!("  {}", line.join(" "));
    }

    println!("stack (top down):");
    for row in 0..16u16 {
        let line: Vec<String> = (0..16u16)
            .map(|col| format!("{:02X}", cpu.memory().read(0x01FF - (row * 16 + col))))
            .collect();
        println!("  {}", line.join(" "));
    }

    println!("A      : {:3}", cpu.a());
    println!("X      : {:3}", cpu.x());
    println!("Y      : {:3}", cpu.y());
    println!("SP     : 0x{:02X}", cpu.sp());
    println!("P      : 0x{:02X}", cpu.status());
    println!("PC     : 0x{:04X}", cpu.pc());
    println!("cycles : {}", cycles);
}
