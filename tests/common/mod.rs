#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use launch_dash::app::DashboardContext;
use tempfile::TempDir;

/// Extract of the launch table, with the extra columns the real file carries.
pub const FIXTURE_CSV: &str = "\
Flight Number,Launch Site,Mission Outcome,class,Payload Mass (kg),Booster Version,Booster Version Category
1,CCAFS LC-40,Success,0,0.0,F9 v1.0  B0003,v1.0
2,CCAFS LC-40,Success,0,0.0,F9 v1.0  B0004,v1.0
3,CCAFS LC-40,Success,0,525.0,F9 v1.0  B0005,v1.0
4,CCAFS LC-40,Success,0,500.0,F9 v1.0  B0006,v1.0
5,CCAFS LC-40,Success,0,677.0,F9 v1.0  B0007,v1.0
6,VAFB SLC-4E,Success,0,500.0,F9 v1.1  B1003,v1.1
7,CCAFS LC-40,Success,0,3170.0,F9 v1.1,v1.1
8,CCAFS LC-40,Success,1,3325.0,F9 v1.1,v1.1
9,CCAFS LC-40,Success,1,2296.0,F9 v1.1,v1.1
10,VAFB SLC-4E,Success,0,9600.0,F9 v1.1 B1017,v1.1
11,KSC LC-39A,Success,1,2490.0,F9 FT B1031.1,FT
12,KSC LC-39A,Success,0,5600.0,F9 FT B1030,FT
13,KSC LC-39A,Success,1,5300.0,F9 FT B1021.2,FT
14,VAFB SLC-4E,Success,1,9600.0,F9 FT B1036.1,FT
15,KSC LC-39A,Success,1,3669.0,F9 B4 B1039.1,B4
16,CCAFS SLC-40,Success,1,2205.0,F9 B4 B1045.1,B4
17,CCAFS SLC-40,Success,0,4230.0,F9 B4 B1041.2,B4
18,CCAFS SLC-40,Success,1,3600.0,F9 B5 B1046.1,B5
";

pub const SITES: [&str; 4] = ["CCAFS LC-40", "CCAFS SLC-40", "KSC LC-39A", "VAFB SLC-4E"];
pub const RECORDS: usize = 18;

pub struct Fixture {
    _tmp: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_contents("spacex_launch_dash.csv", FIXTURE_CSV)
    }

    pub fn with_contents(name: &str, contents: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let path = tmp.path().join(name);
        fs::write(&path, contents).expect("write fixture");
        Self { _tmp: tmp, path }
    }

    pub fn context(&self) -> DashboardContext {
        DashboardContext::load(&self.path).expect("load fixture")
    }
}
